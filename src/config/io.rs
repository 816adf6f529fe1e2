//! Configuration file I/O

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::types::Profile;

/// Get the config directory path (~/.config/claw-card)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("claw-card"))
}

/// Get the default config file path (~/.config/claw-card/config.toml)
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load a profile from a file.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn load_file(path: &Path) -> Result<Profile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let profile = if is_toml(path) {
        toml::from_str(&contents).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_json::from_str(&contents).map_err(|source| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?
    };

    debug!(path = %path.display(), "Loaded config file");
    Ok(profile)
}

/// Load the default config file, or an empty profile if there is none.
pub fn load_default() -> Result<Profile, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_file(&path),
        _ => Ok(Profile::default()),
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
