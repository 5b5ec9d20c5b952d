//! This module handles the console's configuration, including loading and
//! saving deployment settings from a `console.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use cloudlang::config::{self, ConsoleConfig};
//! use std::path::PathBuf;
//!
//! // Start from defaults
//! let mut config = ConsoleConfig::default();
//!
//! // Point at the deployed console
//! config.base_url = "http://127.0.0.1:8080/admin".to_string();
//! config.version = "0.26.10".to_string();
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_console.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.base_url, config.base_url);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use defaults::*;

/// Deployment settings for the admin console page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL the console is served under (`window` base path in the page).
    /// The locale document and flag images are fetched relative to it, and
    /// the locale cookie is scoped to it.
    pub base_url: String,
    /// Release version, appended to the locale document URL as a cache
    /// buster.
    pub version: String,
    /// Lifetime of the locale cookie in days.
    #[serde(default = "default_cookie_expiry_days")]
    pub cookie_expiry_days: u32,
}

fn default_cookie_expiry_days() -> u32 {
    DEFAULT_COOKIE_EXPIRY_DAYS
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            version: String::new(),
            cookie_expiry_days: DEFAULT_COOKIE_EXPIRY_DAYS,
        }
    }
}

impl ConsoleConfig {
    /// URL of the locale description document, with the version appended as
    /// a cache buster.
    pub fn language_document_url(&self) -> String {
        format!(
            "{}/{}?v={}",
            self.base_url.trim_end_matches('/'),
            LANGUAGE_DOCUMENT_PATH,
            self.version
        )
    }

    /// Path the locale cookie is scoped to: the base URL's path component
    /// with a trailing slash.
    pub fn cookie_path(&self) -> String {
        let path = match self.base_url.find("://") {
            Some(scheme_end) => {
                let rest = &self.base_url[scheme_end + 3..];
                match rest.find('/') {
                    Some(slash) => &rest[slash..],
                    None => "",
                }
            }
            None => self.base_url.as_str(),
        };
        format!("{}/", path.trim_end_matches('/'))
    }
}

pub fn load_from_path(path: &Path) -> Result<ConsoleConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ConsoleConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = ConsoleConfig {
            base_url: "http://127.0.0.1:8080/admin".to_string(),
            version: "0.26.10".to_string(),
            cookie_expiry_days: 7,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("console.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("console.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.base_url.is_empty());
        assert_eq!(loaded.cookie_expiry_days, DEFAULT_COOKIE_EXPIRY_DAYS);
    }

    #[test]
    fn language_document_url_appends_version() {
        let config = ConsoleConfig {
            base_url: "http://localhost/admin/".to_string(),
            version: "1.2.3".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(
            config.language_document_url(),
            "http://localhost/admin/static/page/languages.xml?v=1.2.3"
        );
    }

    #[test]
    fn cookie_path_extracts_path_component() {
        let config = ConsoleConfig {
            base_url: "http://localhost:8080/admin".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(config.cookie_path(), "/admin/");
    }

    #[test]
    fn cookie_path_of_root_base_url_is_slash() {
        let config = ConsoleConfig {
            base_url: "http://localhost:8080".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(config.cookie_path(), "/");
    }

    #[test]
    fn cookie_path_without_scheme_uses_whole_base() {
        let config = ConsoleConfig {
            base_url: "/admin".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(config.cookie_path(), "/admin/");
    }
}
