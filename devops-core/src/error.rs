use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevopsError {
    Config(String),
    Io(#[from] std::io::Error),
    Serialization(String),
    Other(#[from] anyhow::Error),
}

impl Display for DevopsError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DevopsError::Config(s) => write!(f, "Configuration error: {}", s),
            DevopsError::Io(e) => write!(f, "I/O error: {}", e),
            DevopsError::Serialization(s) => write!(f, "Serialization error: {}", s),
            DevopsError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl From<serde_yaml_ng::Error> for DevopsError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        DevopsError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for DevopsError {
    fn from(err: serde_json::Error) -> Self {
        DevopsError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DevopsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DevopsError::Config("missing root".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing root");
    }

    #[test]
    fn test_yaml_error_becomes_serialization() {
        let yaml_err = serde_yaml_ng::from_str::<Vec<String>>("key: [unclosed").unwrap_err();
        let err = DevopsError::from(yaml_err);
        assert!(matches!(err, DevopsError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DevopsError::from(io_err);
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
