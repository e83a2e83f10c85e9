//! Configuration management for Charter Chat.
//!
//! Loads configuration from ${CHARTER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the answering service base URL.
pub const API_BASE_ENV: &str = "CHARTER_API_BASE";

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Charter configuration and log directories.
    //!
    //! CHARTER_HOME resolution order:
    //! 1. CHARTER_HOME environment variable (if set)
    //! 2. ~/.config/charter (default)

    use std::path::PathBuf;

    /// Returns the Charter home directory.
    pub fn charter_home() -> PathBuf {
        if let Ok(home) = std::env::var("CHARTER_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".charter"),
            |h| h.join(".config").join("charter"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        charter_home().join("config.toml")
    }

    /// Returns the default log directory.
    pub fn log_dir() -> PathBuf {
        charter_home().join("logs")
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `CHARTER_LOG` is unset.
    pub filter: String,
    /// Directory for log files (defaults to ${CHARTER_HOME}/logs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            dir: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the answering service (without the `/chat` path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Title shown in the header bar.
    pub title: String,

    /// Seed greeting shown as the first bot message of every session.
    pub greeting: String,

    /// Hint shown in the empty input box.
    pub placeholder: String,

    /// Logging configuration.
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: None,
            title: Self::DEFAULT_TITLE.to_string(),
            greeting: Self::DEFAULT_GREETING.to_string(),
            placeholder: Self::DEFAULT_PLACEHOLDER.to_string(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
    const DEFAULT_TITLE: &str = "ISSA Charter Chat";
    const DEFAULT_GREETING: &str = "Hi! Ask me about the ISSA Charter.";
    const DEFAULT_PLACEHOLDER: &str = "Ask about admissions, calendars, staff, policies...";

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// Fails if the file already exists (no silent overwrite).
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resolves the answering service base URL.
    ///
    /// Precedence: explicit override (CLI flag) > `CHARTER_API_BASE` > config > default.
    pub fn resolve_api_base(&self, override_url: Option<&str>) -> Result<String> {
        let env_url = std::env::var(API_BASE_ENV).ok();
        resolve_base_url(
            override_url,
            env_url.as_deref(),
            self.api_base.as_deref(),
            Self::DEFAULT_API_BASE,
        )
    }
}

/// Picks the first non-blank candidate, strips trailing slashes and validates it.
///
/// # Errors
/// Returns an error if the chosen URL does not parse.
pub fn resolve_base_url(
    override_url: Option<&str>,
    env_url: Option<&str>,
    config_url: Option<&str>,
    default_url: &str,
) -> Result<String> {
    let chosen = [override_url, env_url, config_url]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(default_url);

    let normalized = normalize_base_url(chosen);
    url::Url::parse(&normalized)
        .with_context(|| format!("Invalid answering service base URL: {normalized}"))?;
    Ok(normalized)
}

/// Trims whitespace and strips every trailing `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
