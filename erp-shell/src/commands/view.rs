//! Whole-window view model
use serde::Serialize;

use erp_core::{content_for, nav_items, show_close_all, tab_strip, Content, NavItem, TabChip};

use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ViewInfo {
    pub title: String,
    pub nav: Vec<NavItem>,
    pub show_close_all: bool,
    pub tabs: Vec<TabChip>,
    pub content: Content,
    pub revision: u64,
}

pub fn get_view(state: &AppState) -> CommandResult<ViewInfo> {
    let config = state.config();
    let view = state.workspace().with_manager(|manager| ViewInfo {
        title: config.app_name.clone(),
        nav: nav_items(manager),
        show_close_all: show_close_all(manager),
        tabs: tab_strip(manager),
        content: content_for(manager, config),
        revision: manager.revision(),
    });

    CommandResult::ok(view)
}
