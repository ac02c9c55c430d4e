//! Configuration file handling.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GantryError, Result};

/// Environment variable overriding the configured API base URL.
pub const ENV_API_URL: &str = "GANTRY_API_URL";

/// Environment variable overriding the configured API token.
pub const ENV_API_TOKEN: &str = "GANTRY_API_TOKEN";

/// Environment variable overriding the configured default project.
pub const ENV_PROJECT: &str = "GANTRY_PROJECT";

/// Settings read from the Gantry config file.
///
/// All fields are optional. Every setting resolves through the same
/// precedence chain: CLI flag, then environment variable, then this file.
/// The file itself is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the project API
    pub api_url: Option<String>,

    /// Bearer token presented to the project API
    pub api_token: Option<String>,

    /// Default project ID for commands that do not name one
    pub project: Option<String>,
}

impl Config {
    /// Load the config file from the XDG config directory.
    ///
    /// Looks for `$XDG_CONFIG_HOME/gantry/config.json` (typically
    /// `~/.config/gantry/config.json`). A missing file yields the default
    /// configuration; a present but unreadable or malformed file is an
    /// error.
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GantryError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Locate the config file following the XDG Base Directory
    /// specification.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("gantry").find_config_file("config.json")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"api_url": "https://api.example.com", "project": "proj-7"}}"#
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.api_token, None);
        assert_eq!(config.project.as_deref(), Some("proj-7"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        match Config::load_from(&path).unwrap_err() {
            GantryError::FileSystem { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        match Config::load_from(&path).unwrap_err() {
            GantryError::Serialization { .. } => {}
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }
}
