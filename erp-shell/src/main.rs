//! Open ERP Shell
//!
//! Headless driver for the ERP workspace: the navigation bar, tab strip and
//! content area are exposed as line commands with JSON replies on stdout.
//! Logs go to stderr.

mod commands;
mod state;

use anyhow::Context;
use std::io;

use erp_core::Config;
use state::AppState;

fn main() -> anyhow::Result<()> {
    let config_path = Config::config_path();
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    erp_core::init_logging(&config.log_filter);

    if !config_path.exists() {
        match config.save(&config_path) {
            Ok(()) => tracing::info!(path = %config_path.display(), "Wrote default config"),
            Err(e) => tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Could not write default config"
            ),
        }
    }

    let state = AppState::new(config);

    tracing::info!(
        app = %state.config().app_name,
        policy = %state.workspace().policy(),
        "Open ERP shell started"
    );

    commands::run(&state, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Open ERP shell stopped");
    Ok(())
}
