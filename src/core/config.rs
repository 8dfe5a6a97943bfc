//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.confsched/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::route::{Route, RouteError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfschedConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Conference name shown in the title bar.
    pub conference_name: Option<String>,
    /// Path to a JSON schedule file. Bundled sample when unset.
    pub schedule_file: Option<PathBuf>,
    /// Start destination, as a route string (e.g. "Speaker List").
    pub start_route: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONFERENCE_NAME: &str = "OpenConf";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub conference_name: String,
    /// None means the bundled sample schedule.
    pub schedule_file: Option<PathBuf>,
    pub start_route: Route,
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

/// Returns the path to `~/.confsched/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".confsched").join("config.toml"))
}

/// Load config from `~/.confsched/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ConfschedConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ConfschedConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ConfschedConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ConfschedConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ConfschedConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# confsched Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# conference_name = "OpenConf"       # Or set CONFSCHED_CONFERENCE env var
# schedule_file = "schedule.json"    # Or set CONFSCHED_SCHEDULE; bundled sample when unset
# start_route = "Session List"       # "Session List", "Speaker List", or "Room List"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// Fails with [`RouteError`] when the start route is malformed or names
/// an unknown screen — a configuration mismatch the caller must surface,
/// not swallow.
pub fn resolve(
    config: &ConfschedConfig,
    cli_schedule: Option<&Path>,
    cli_start: Option<&str>,
) -> Result<ResolvedConfig, RouteError> {
    // Conference name: env → config → default
    let conference_name = std::env::var("CONFSCHED_CONFERENCE")
        .ok()
        .or_else(|| config.general.conference_name.clone())
        .unwrap_or_else(|| DEFAULT_CONFERENCE_NAME.to_string());

    // Schedule file: CLI → env → config → bundled sample (None)
    let schedule_file = cli_schedule
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("CONFSCHED_SCHEDULE").ok().map(PathBuf::from))
        .or_else(|| config.general.schedule_file.clone());

    // Start route: CLI → config → default
    let start_route = match cli_start.or(config.general.start_route.as_deref()) {
        Some(raw) => Route::parse(raw)?,
        None => Route::SessionList,
    };

    Ok(ResolvedConfig {
        conference_name,
        schedule_file,
        start_route,
    })
}
