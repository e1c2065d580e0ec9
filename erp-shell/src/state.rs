//! Application state
use erp_core::{Config, TabEvent, Workspace};

/// Everything a command handler needs, created once at startup
pub struct AppState {
    workspace: Workspace,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let workspace = Workspace::new(config.open_policy);

        workspace.subscribe(Box::new(|event: &TabEvent| match event {
            TabEvent::ActiveChanged { previous, current } => {
                tracing::debug!(?previous, ?current, "Active tab changed");
            }
            other => tracing::trace!(event = ?other, "Tab event"),
        }));

        Self { workspace, config }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
