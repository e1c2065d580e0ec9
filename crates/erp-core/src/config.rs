//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use erp_tabs::{OpenPolicy, Section};

use crate::error::CoreError;
use crate::Result;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "OPEN_ERP_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window and welcome-screen title
    pub app_name: String,
    /// Policy used when a navigation button opens a section
    pub open_policy: OpenPolicy,
    /// Shortcuts shown on the welcome screen
    pub quick_launch: Vec<Section>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Open ERP".to_string(),
            open_policy: OpenPolicy::default(),
            quick_launch: vec![
                Section::Dashboard,
                Section::Products,
                Section::Clients,
                Section::Sales,
            ],
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(CoreError::Config("app_name cannot be empty".to_string()));
        }
        Ok(())
    }

    /// `$OPEN_ERP_CONFIG`, or `config.json` in the platform config directory
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|d| d.join("open-erp"))
            .unwrap_or_else(|| PathBuf::from(".open-erp"))
            .join("config.json")
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".config"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("open-erp-test-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(&temp_path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.open_policy, OpenPolicy::SingletonPerSection);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(r#"{ "open_policy": "multi_instance" }"#).unwrap();
        assert_eq!(config.open_policy, OpenPolicy::MultiInstance);
        assert_eq!(config.quick_launch.len(), 4);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = Config::from_json(r#"{ "quick_launch": ["payroll"] }"#);
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_empty_app_name_rejected() {
        let result = Config::from_json(r#"{ "app_name": " " }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path();
        let config = Config {
            quick_launch: vec![Section::Inventory],
            ..Config::default()
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
