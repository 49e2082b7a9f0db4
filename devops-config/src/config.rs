use clap::ValueEnum;
use devops_logging::LogSettings;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root structure of the snow-devops configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DevopsConfig {
    /// Result rendering defaults
    #[serde(default, skip_serializing_if = "OutputSettings::is_default")]
    pub output: OutputSettings,

    /// Project discovery defaults
    #[serde(default, skip_serializing_if = "ProjectsSettings::is_default")]
    pub projects: ProjectsSettings,

    /// Logging settings; environment variables still win over these
    #[serde(default)]
    pub logging: LogSettings,

    /// Unknown keys, kept so newer config files still load
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputSettings {
    pub fn is_default(&self) -> bool {
        self.format == OutputFormat::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProjectsSettings {
    /// Descend into symlinked directories while searching for projects
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl ProjectsSettings {
    pub fn is_default(&self) -> bool {
        !self.follow_symlinks
    }
}

impl DevopsConfig {
    /// Load configuration from a specific path
    pub fn load_from_path(path: &std::path::Path) -> devops_core::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(&contents)?;
        Ok(config)
    }

    /// Logging settings with `LOG_*` environment overrides applied.
    pub fn effective_log_settings(&self) -> LogSettings {
        self.logging.clone().with_env_overrides()
    }
}
