//! Error types for the snow-devops CLI.
//!
//! Every error that reaches `main` is one of these categories, each able to
//! suggest a corrective action through [`DevopsCliError::hint`].

use devops_core::DevopsError;
use devops_messages::{messages::MESSAGES, msg};
use devops_projects::LocatorError;
use std::fmt;

#[derive(Debug)]
pub enum DevopsCliError {
    /// Configuration file or settings problems
    Config {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: String,
    },

    /// Project discovery could not start
    Discovery { source: LocatorError },

    /// Rendering a command result failed
    Output {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: String,
    },

    /// Anything that does not fit the categories above
    General {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: String,
    },
}

impl fmt::Display for DevopsCliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevopsCliError::Config { context, .. } => write!(f, "Configuration error: {context}"),
            DevopsCliError::Discovery { source } => write!(f, "{source}"),
            DevopsCliError::Output { context, .. } => write!(f, "Output error: {context}"),
            DevopsCliError::General { context, .. } => write!(f, "{context}"),
        }
    }
}

impl std::error::Error for DevopsCliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DevopsCliError::Config { source, .. }
            | DevopsCliError::Output { source, .. }
            | DevopsCliError::General { source, .. } => Some(source.as_ref()),
            DevopsCliError::Discovery { source } => Some(source),
        }
    }
}

impl DevopsCliError {
    pub fn output<E: std::error::Error + Send + Sync + 'static>(
        source: E,
        context: impl Into<String>,
    ) -> Self {
        Self::Output {
            source: Box::new(source),
            context: context.into(),
        }
    }

    /// A suggestion printed after the error, if there is a useful one.
    pub fn hint(&self) -> Option<String> {
        match self {
            DevopsCliError::Config { .. } => Some(MESSAGES.config_hint_check_file.to_string()),
            DevopsCliError::Discovery { source } => match source.path() {
                Some(path) => Some(msg!(
                    MESSAGES.projects_hint_check_root,
                    path = path.display().to_string()
                )),
                None => Some(MESSAGES.projects_hint_set_root.to_string()),
            },
            DevopsCliError::Output { .. } | DevopsCliError::General { .. } => None,
        }
    }
}

pub type DevopsResult<T> = Result<T, DevopsCliError>;

impl From<LocatorError> for DevopsCliError {
    fn from(err: LocatorError) -> Self {
        DevopsCliError::Discovery { source: err }
    }
}

impl From<DevopsError> for DevopsCliError {
    fn from(err: DevopsError) -> Self {
        match err {
            DevopsError::Config(msg) => DevopsCliError::Config {
                source: Box::new(std::io::Error::other(msg.clone())),
                context: msg,
            },
            DevopsError::Serialization(msg) => DevopsCliError::Config {
                source: Box::new(std::io::Error::other(msg.clone())),
                context: format!("Invalid configuration: {msg}"),
            },
            DevopsError::Io(err) => DevopsCliError::from(err),
            DevopsError::Other(err) => DevopsCliError::from(err),
        }
    }
}

impl From<serde_json::Error> for DevopsCliError {
    fn from(err: serde_json::Error) -> Self {
        DevopsCliError::output(err, "Failed to serialize command result")
    }
}

impl From<std::io::Error> for DevopsCliError {
    fn from(err: std::io::Error) -> Self {
        let context = format!("I/O error: {err}");
        DevopsCliError::General {
            source: Box::new(err),
            context,
        }
    }
}

impl From<anyhow::Error> for DevopsCliError {
    fn from(err: anyhow::Error) -> Self {
        // Keep the full message; the anyhow chain itself is not `Error + 'static`.
        let error_msg = format!("{err:#}");
        DevopsCliError::General {
            source: Box::new(std::io::Error::other(error_msg.clone())),
            context: error_msg,
        }
    }
}
