//! Configuration file resolution.
//!
//! Lookup order:
//! 1. an explicit path (the `--config` flag), which must exist
//! 2. the path in `SNOW_DEVOPS_CONFIG`, which must exist
//! 3. `~/.snowflake/devops.yaml`, used only when present
//!
//! When nothing is found the defaults are used.

use crate::config::DevopsConfig;
use crate::paths::default_config_path;
use devops_core::{DevopsError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV_VAR: &str = "SNOW_DEVOPS_CONFIG";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    UserDefault(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p)
            | ConfigSource::Environment(p)
            | ConfigSource::UserDefault(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

fn resolve_source(explicit: Option<&Path>) -> Result<ConfigSource> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(DevopsError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        return Ok(ConfigSource::Explicit(path.to_path_buf()));
    }

    if let Ok(value) = env::var(CONFIG_ENV_VAR) {
        if !value.trim().is_empty() {
            let path = PathBuf::from(value);
            if !path.is_file() {
                return Err(DevopsError::Config(format!(
                    "Configuration file from {CONFIG_ENV_VAR} not found: {}",
                    path.display()
                )));
            }
            return Ok(ConfigSource::Environment(path));
        }
    }

    match default_config_path() {
        Some(path) if path.is_file() => Ok(ConfigSource::UserDefault(path)),
        _ => Ok(ConfigSource::Defaults),
    }
}

/// Resolve and load the effective configuration.
pub fn load(explicit: Option<&Path>) -> Result<(DevopsConfig, ConfigSource)> {
    let source = resolve_source(explicit)?;
    let config = match source.path() {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            DevopsConfig::load_from_path(path).map_err(|e| match e {
                DevopsError::Serialization(msg) => DevopsError::Config(format!(
                    "Invalid configuration file {}: {msg}",
                    path.display()
                )),
                other => other,
            })?
        }
        None => {
            debug!("no configuration file found, using defaults");
            DevopsConfig::default()
        }
    };
    Ok((config, source))
}
