//! Open ERP Core
//!
//! Coordination layer between the tab manager and whatever draws the
//! window. The core owns all state; renderers only read view models.

mod config;
mod content;
mod error;
mod navigation;
mod presentation;
mod workspace;

pub use config::Config;
pub use content::{content_for, Content, PlaceholderPage};
pub use error::CoreError;
pub use navigation::{nav_items, show_close_all, tab_strip, NavItem, TabChip};
pub use presentation::SectionStyle;
pub use workspace::{Workspace, WorkspaceSnapshot};

// Re-export the tab core
pub use erp_tabs::{
    Listener, OpenPolicy, Section, SubscriptionId, Tab, TabError, TabEvent, TabManager,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
