// src/config.rs
// =============================================================================
// Run configuration, read once at startup and passed by reference to the
// GitHub client.
//
// Inputs:
// - GITHUB_USERNAME (required): whose repositories we count
// - GITHUB_TOKEN    (optional): sent as `Authorization: token ...`
//
// Everything else (API base URL, output path) is fixed. The API base is only
// overridable through `Config::new`, which the tests use to point the client
// at a local mock server.
// =============================================================================

use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub const USERNAME_VAR: &str = "GITHUB_USERNAME";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const OUTPUT_FILE: &str = "LANG_STATS.md";

#[derive(Clone)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
    pub api_base: String,
    pub output_path: PathBuf,
}

// Hand-written so the token never ends up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl Config {
    pub fn new(username: impl Into<String>, token: Option<String>, api_base: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(USERNAME_VAR).ok(),
            std::env::var(TOKEN_VAR).ok(),
        )
    }

    /// Builds a configuration from raw variable values.
    ///
    /// An empty username is as good as a missing one; an empty token means
    /// "no token".
    pub fn from_vars(username: Option<String>, token: Option<String>) -> Result<Self> {
        let username = username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| anyhow!("{} environment variable is required.", USERNAME_VAR))?;

        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self::new(username, token, GITHUB_API_BASE))
    }
}
