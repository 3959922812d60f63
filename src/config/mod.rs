pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".kubemon.toml";

/// Get the global config file path (~/.kubemon.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (dir/.kubemon.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Read and parse a config file, reporting every failure.
pub fn load_config_file(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let config: types::Config =
        toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    config.sanitizer.validate()?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit path must load cleanly. Otherwise the local config in
/// `working_dir` is tried, then the global one; unreadable or invalid files
/// there fall back to defaults.
pub fn load_config(explicit: Option<&Path>, working_dir: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        log::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let candidates = working_dir
        .map(local_config_path)
        .into_iter()
        .chain(global_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
        }
    }

    Ok(types::Config::default())
}

/// Write configuration to `path`, refusing to clobber unless `force`.
pub fn save_config(config: &types::Config, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.display().to_string()).into());
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

/// Save configuration to the global config file
pub fn save_global_config(config: &types::Config, force: bool) -> Result<PathBuf> {
    let path = global_config_path().ok_or(ConfigError::NoHomeDir)?;
    save_config(config, &path, force)?;
    Ok(path)
}
