//! Open ERP Tab Management
//!
//! The workspace is a strip of tabs, each bound to one business section.
//! `TabManager` is the single source of truth for which tabs are open and
//! which one is active; renderers read its state and subscribe to its events.

mod error;
mod event;
mod manager;
mod policy;
mod section;
mod tab;

pub use error::TabError;
pub use event::{Listener, SubscriptionId, TabEvent};
pub use manager::TabManager;
pub use policy::OpenPolicy;
pub use section::Section;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
