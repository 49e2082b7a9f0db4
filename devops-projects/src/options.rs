use std::path::{Path, PathBuf};

/// What to scan and how.
///
/// Building options never touches the filesystem; the root is validated
/// when it is handed to [`ProjectLocator::scan`](crate::ProjectLocator::scan).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    root: Option<PathBuf>,
    follow_symlinks: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Replace the root for subsequent scans.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = Some(root.into());
    }

    /// Descend into symlinked directories. Off by default, which also keeps
    /// symlink cycles out of the walk.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_options_have_no_root() {
        let options = ScanOptions::new();
        assert!(options.root().is_none());
        assert!(!options.follows_symlinks());
    }

    #[test]
    fn test_set_root_replaces_previous_root() {
        let mut options = ScanOptions::new().with_root("/first");
        options.set_root("/second");
        assert_eq!(options.root(), Some(Path::new("/second")));
    }

    #[test]
    fn test_configuring_a_missing_root_is_not_validated() {
        let options = ScanOptions::new().with_root("/definitely/not/here");
        assert_eq!(options.root(), Some(Path::new("/definitely/not/here")));
    }
}
