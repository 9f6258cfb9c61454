//! Configuration loading and discovery for `stylecfg.toml`
//!
//! Also loads host configuration objects and stylesheet sources for the
//! command-line front end.

use super::schema::StylecfgConfig;
use crate::directive::SyntaxError;
use crate::merge::ConfigObject;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project configuration file name.
pub const CONFIG_FILE_NAME: &str = "stylecfg.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON5 parsing error
    #[error("Failed to parse JSON5: {0}")]
    Json5(#[from] json5::Error),
    /// Host config file has an extension we don't read
    #[error("Unsupported host config format '{}' (expected .json, .json5 or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Host config top level is not an object
    #[error("Host config '{}' must contain an object at the top level", .0.display())]
    NotAnObject(PathBuf),
    /// Marker could not be compiled into a directive syntax
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override directive marker
    pub marker: Option<String>,
    /// Override host configuration file
    pub host: Option<PathBuf>,
    /// Enable strict validation
    pub strict: Option<bool>,
}

/// Find stylecfg.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for stylecfg.toml
/// 2. Check XDG_CONFIG_HOME/stylecfg/stylecfg.toml (or ~/.config/stylecfg/stylecfg.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find stylecfg.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("stylecfg").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find stylecfg.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a stylecfg.toml file.
///
/// If a path is provided, loads from that file (a missing file is an error).
/// Otherwise uses [`find_config`]; when nothing is found the defaults are
/// returned.
pub fn load_config(path: Option<&Path>) -> Result<StylecfgConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(StylecfgConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<StylecfgConfig, ConfigError> {
    log::debug!("loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: StylecfgConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut StylecfgConfig, overrides: &CliOverrides) {
    if let Some(ref marker) = overrides.marker {
        config.project.marker = marker.clone();
    }

    if let Some(ref host) = overrides.host {
        config.project.host = Some(host.clone());
    }

    if let Some(strict) = overrides.strict {
        config.validate.strict = strict;
    }
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// Load a host configuration object.
///
/// The format follows the extension: `.json`, `.json5` or `.toml`.
pub fn load_host_config(path: &Path) -> Result<ConfigObject, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);

    let value: Value = match extension.as_deref() {
        Some("json") => serde_json::from_str(&contents)?,
        Some("json5") => json5::from_str(&contents)?,
        Some("toml") => toml::from_str(&contents)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject(path.to_path_buf())),
    }
}

/// Read a stylesheet source.
///
/// A file that cannot be read yields empty text, so the caller still gets an
/// (empty) parse result.
pub fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("could not read '{}': {}; treating as empty", path.display(), e);
            String::new()
        }
    }
}
