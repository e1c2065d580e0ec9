//! Tab management commands
use serde::{Deserialize, Serialize};

use erp_core::{OpenPolicy, Section, Tab};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub title: String,
    pub section: Section,
    pub is_active: bool,
}

impl TabInfo {
    fn from_tab(tab: Tab, is_active: bool) -> Self {
        Self {
            title: tab.display_title().to_string(),
            id: tab.id,
            section: tab.section,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

pub fn open_tab(
    state: &AppState,
    section: Section,
    title: Option<String>,
    policy: Option<OpenPolicy>,
) -> CommandResult<TabInfo> {
    let workspace = state.workspace();
    let policy = policy.unwrap_or_else(|| workspace.policy());

    let tab = match title {
        Some(title) => workspace.open_titled(section, title, policy),
        None => workspace.open_with(section, policy),
    };

    CommandResult::ok(TabInfo::from_tab(tab, true))
}

/// Unknown ids succeed without changing anything
pub fn activate_tab(state: &AppState, tab_id: &str) -> CommandResult<Option<TabInfo>> {
    let workspace = state.workspace();
    workspace.select(tab_id);
    CommandResult::ok(workspace.active_tab().map(|t| TabInfo::from_tab(t, true)))
}

pub fn close_tab(state: &AppState, tab_id: &str) -> CommandResult<Option<TabInfo>> {
    let closed = state.workspace().close(tab_id);
    CommandResult::ok(closed.map(|t| TabInfo::from_tab(t, false)))
}

pub fn close_all_tabs(state: &AppState) -> CommandResult<usize> {
    CommandResult::ok(state.workspace().close_all())
}

pub fn get_tabs(state: &AppState) -> CommandResult<Vec<TabInfo>> {
    let snapshot = state.workspace().snapshot();
    let active_id = snapshot.active_id;

    CommandResult::ok(
        snapshot
            .tabs
            .into_iter()
            .map(|t| {
                let is_active = active_id.as_deref() == Some(t.id.as_str());
                TabInfo::from_tab(t, is_active)
            })
            .collect(),
    )
}

pub fn get_active_tab(state: &AppState) -> CommandResult<Option<TabInfo>> {
    CommandResult::ok(
        state
            .workspace()
            .active_tab()
            .map(|t| TabInfo::from_tab(t, true)),
    )
}

pub fn set_policy(state: &AppState, policy: Option<OpenPolicy>) -> CommandResult<OpenPolicy> {
    let workspace = state.workspace();
    if let Some(policy) = policy {
        workspace.set_policy(policy);
    }
    CommandResult::ok(workspace.policy())
}
