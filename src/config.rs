//! Optional user configuration
//!
//! Loaded once from `~/.safari-tui/config.json` if present; every field has
//! a default so the app runs with no file at all. The config is read-only
//! at runtime.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tab shown after the splash ("destinations", "services", "videos", "contact")
    #[serde(default = "default_start_tab")]
    pub start_tab: String,
    /// Gallery filter active at startup ("all" or a category key)
    #[serde(default = "default_filter")]
    pub default_filter: String,
    /// Skip the splash screen entirely
    #[serde(default)]
    pub skip_splash: bool,
}

fn default_start_tab() -> String {
    "destinations".to_string()
}

fn default_filter() -> String {
    "all".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_tab: default_start_tab(),
            default_filter: default_filter(),
            skip_splash: false,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".safari-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, or `None` when absent or unreadable
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed config file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.start_tab, "destinations");
        assert_eq!(config.default_filter, "all");
        assert!(!config.skip_splash);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"start_tab": "videos"}"#).unwrap();
        assert_eq!(config.start_tab, "videos");
        assert_eq!(config.default_filter, "all");
        assert!(!config.skip_splash);
    }
}
