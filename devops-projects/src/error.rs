use std::{io, path::PathBuf};

/// Errors that abort a scan before any project is produced.
///
/// Problems with individual entries found during the walk are not errors;
/// they are reported to the [`ScanObserver`](crate::ScanObserver) and skipped.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("Root folder not configured. Please provide a --root-folder path.")]
    RootNotConfigured,
    #[error("Root folder does not exist: {}", .path.display())]
    RootNotFound { path: PathBuf },
    #[error("Root folder path is not a directory: {}", .path.display())]
    RootNotADirectory { path: PathBuf },
    #[error("Root folder is not accessible: {}: {source}", .path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LocatorError {
    /// The root the error refers to, if one was configured.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LocatorError::RootNotConfigured => None,
            LocatorError::RootNotFound { path }
            | LocatorError::RootNotADirectory { path }
            | LocatorError::RootInaccessible { path, .. } => Some(path),
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
