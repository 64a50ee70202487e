//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`THOMAS_BASE_URL`, `THOMAS_TIMEOUT_SECS`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./thomas.toml in the current directory
//! 4. $XDG_CONFIG_HOME/thomas/thomas.toml (or ~/.config/thomas/thomas.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default backend address (the development server's bind address).
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Default per-request timeout, matching the backend's upstream timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

/// Backend connection settings used by the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the Thomas backend, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Terminal display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Whether to style output with colors.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

// ---------------------------------------------------------------------------
// File shape
// ---------------------------------------------------------------------------

/// On-disk TOML shape: every field optional so partial files merge over
/// defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    server: FileServerConfig,
    #[serde(default)]
    display: FileDisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
struct FileServerConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDisplayConfig {
    color: Option<bool>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from the --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_with_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        dirs::config_dir,
    )
}

/// Loader with injected file/env/config-dir sources so precedence behavior
/// stays unit-testable.
fn load_config_with_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_config(parsed);
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    Ok(config)
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit --config path must exist; the fallback chain is best-effort.
    if let Some(p) = path_override {
        return Ok(read_file(Path::new(p))?);
    }

    if let Ok(text) = read_file(Path::new("thomas.toml")) {
        return Ok(text);
    }
    if let Some(dir) = config_root() {
        let global = dir.join("thomas").join("thomas.toml");
        if let Ok(text) = read_file(&global) {
            return Ok(text);
        }
    }

    Ok(String::new())
}

fn resolve_config(file: FileConfig) -> Config {
    let defaults = Config::default();
    Config {
        server: ServerConfig {
            base_url: file
                .server
                .base_url
                .unwrap_or(defaults.server.base_url),
            timeout_secs: file
                .server
                .timeout_secs
                .unwrap_or(defaults.server.timeout_secs),
        },
        display: DisplayConfig {
            color: file.display.color.unwrap_or(defaults.display.color),
        },
    }
}

fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = env_lookup("THOMAS_BASE_URL") {
        config.server.base_url = url;
    }
    if let Some(raw) = env_lookup("THOMAS_TIMEOUT_SECS") {
        let secs = raw.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!("THOMAS_TIMEOUT_SECS must be an integer, got `{raw}`"))
        })?;
        config.server.timeout_secs = secs;
    }
    Ok(())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.server.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid("server.base_url is empty".into()));
    }
    if config.server.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "server.timeout_secs must be non-zero".into(),
        ));
    }
    Ok(())
}
