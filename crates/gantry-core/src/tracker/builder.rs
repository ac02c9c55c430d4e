//! Builder for creating and configuring Tracker instances.

use std::env;
use std::path::{Path, PathBuf};

use super::Tracker;
use crate::{
    api::ApiClient,
    config::{Config, ENV_API_TOKEN, ENV_API_URL, ENV_PROJECT},
    error::{GantryError, Result},
};

/// Builder for creating and configuring Tracker instances.
///
/// Every setting resolves through the same precedence chain: explicit
/// builder value (CLI flag), then environment variable, then config file.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    api_url: Option<String>,
    api_token: Option<String>,
    project: Option<String>,
    config_path: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_url: None,
            api_token: None,
            project: None,
            config_path: None,
        }
    }

    /// Sets the API base URL.
    ///
    /// If not specified, falls back to `GANTRY_API_URL`, then to the
    /// `api_url` entry of the config file.
    pub fn with_api_url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.api_url = Some(url.into());
        }
        self
    }

    /// Sets the bearer token presented to the API.
    ///
    /// If not specified, falls back to `GANTRY_API_TOKEN`, then to the
    /// `api_token` entry of the config file. Without a token, requests are
    /// sent unauthenticated.
    pub fn with_api_token<S: Into<String>>(mut self, token: Option<S>) -> Self {
        if let Some(token) = token {
            self.api_token = Some(token.into());
        }
        self
    }

    /// Sets the default project ID for operations that do not name one.
    ///
    /// If not specified, falls back to `GANTRY_PROJECT`, then to the
    /// `project` entry of the config file.
    pub fn with_project<S: Into<String>>(mut self, project: Option<S>) -> Self {
        if let Some(project) = project {
            self.project = Some(project.into());
        }
        self
    }

    /// Sets a custom config file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/gantry/config.json` or `~/.config/gantry/config.json`
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `GantryError::FileSystem` or `GantryError::Serialization` if
    /// an explicitly given config file cannot be read or parsed
    /// Returns `GantryError::Configuration` if no API base URL is set
    /// through any source
    pub fn build(self) -> Result<Tracker> {
        let config = match &self.config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let api_url = self
            .api_url
            .or_else(|| env_var(ENV_API_URL))
            .or(config.api_url)
            .ok_or_else(|| GantryError::Configuration {
                message: "API base URL not set. Pass --api-url, set GANTRY_API_URL, or add \
                          api_url to the config file."
                    .to_string(),
            })?;

        let api_token = self
            .api_token
            .or_else(|| env_var(ENV_API_TOKEN))
            .or(config.api_token);

        let project = self
            .project
            .or_else(|| env_var(ENV_PROJECT))
            .or(config.project);

        let api = ApiClient::new(api_url, api_token)?;
        Ok(Tracker::new(api, project))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
