//! Configuration for snow-devops.
//!
//! The configuration lives in a single YAML file (by default
//! `~/.snowflake/devops.yaml`). Every section is optional and falls back to
//! its defaults, so an empty or missing file is a valid configuration.

pub mod config;
pub mod loader;
pub mod paths;


pub use config::{DevopsConfig, OutputFormat, OutputSettings, ProjectsSettings};
pub use devops_logging::LogSettings;
pub use loader::{load, ConfigSource, CONFIG_ENV_VAR};
