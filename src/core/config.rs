//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::theme::Theme;
use crate::remote::clients::rest_countries::DEFAULT_COUNTRIES_BASE_URL;
use crate::remote::clients::wikipedia::DEFAULT_SUMMARY_BASE_URL;
use crate::remote::{HttpSettings, default_user_agent};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EndpointsConfig {
    pub countries_url: Option<String>,
    pub summary_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub countries_url: String,
    pub summary_url: String,
    pub http: HttpSettings,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtlasConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] with an explicit path.
pub fn load_config_from(path: &Path) -> Result<AtlasConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AtlasConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Atlas Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                    # "light" or "dark" (or ATLAS_THEME, --theme)

# [endpoints]
# countries_url = "https://restcountries.com/v3.1"        # Or ATLAS_COUNTRIES_URL
# summary_url = "https://en.wikipedia.org/api/rest_v1"    # Or ATLAS_SUMMARY_URL

# [http]
# timeout_secs = 10                  # No timeout unless set (or ATLAS_HTTP_TIMEOUT_SECS)
# user_agent = "atlas/0.1.0"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` is from the `--theme` flag (None = not specified).
pub fn resolve(config: &AtlasConfig, cli_theme: Option<Theme>) -> ResolvedConfig {
    resolve_with_env(config, cli_theme, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &AtlasConfig, cli_theme: Option<Theme>, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| {
            env("ATLAS_THEME").and_then(|raw| {
                let parsed = Theme::parse(&raw);
                if parsed.is_none() {
                    warn!("Ignoring invalid ATLAS_THEME value: {}", raw);
                }
                parsed
            })
        })
        .or(config.general.theme)
        .unwrap_or_default();

    // Countries base URL: env → config → default
    let countries_url = env("ATLAS_COUNTRIES_URL")
        .or_else(|| config.endpoints.countries_url.clone())
        .unwrap_or_else(|| DEFAULT_COUNTRIES_BASE_URL.to_string());

    // Summary base URL: env → config → default
    let summary_url = env("ATLAS_SUMMARY_URL")
        .or_else(|| config.endpoints.summary_url.clone())
        .unwrap_or_else(|| DEFAULT_SUMMARY_BASE_URL.to_string());

    // Timeout: env → config → none
    let timeout_secs = env("ATLAS_HTTP_TIMEOUT_SECS")
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(e) => {
                warn!("Ignoring invalid ATLAS_HTTP_TIMEOUT_SECS '{}': {}", raw, e);
                None
            }
        })
        .or(config.http.timeout_secs);

    let user_agent = config
        .http
        .user_agent
        .clone()
        .unwrap_or_else(default_user_agent);

    ResolvedConfig {
        theme,
        countries_url,
        summary_url,
        http: HttpSettings {
            user_agent,
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        },
    }
}
