use std::{
    fs, io,
    iter::FusedIterator,
    path::{Path, PathBuf},
    vec,
};

use walkdir::{DirEntry, WalkDir};

use crate::{
    error::{LocatorError, Result},
    observer::{ScanObserver, TracingObserver},
    options::ScanOptions,
    types::{ProjectRecord, SNOWFLAKE_PROJECT_FILE},
};

/// Finds Snowflake projects below a root folder.
///
/// The locator holds no scan state; every call to [`scan`](Self::scan)
/// validates the root again and walks the tree from scratch.
#[derive(Debug, Clone, Default)]
pub struct ProjectLocator<O = TracingObserver> {
    observer: O,
}

impl ProjectLocator<TracingObserver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ScanObserver> ProjectLocator<O> {
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Validate the configured root and collect its marker files.
    ///
    /// Fails with [`LocatorError`] if the root is unset, missing or not a
    /// directory. The returned iterator builds each [`ProjectRecord`] on
    /// demand; entries that cannot be inspected at that point are reported
    /// to the observer and skipped.
    pub fn scan(&self, options: &ScanOptions) -> Result<Projects<'_, O>> {
        let root = validate_root(options)?;
        self.observer.search_started(&root);

        let markers = self.find_markers(&root, options.follows_symlinks());
        Ok(Projects {
            root,
            markers: markers.into_iter(),
            observer: &self.observer,
        })
    }

    /// Run a scan to completion.
    pub fn list(&self, options: &ScanOptions) -> Result<Vec<ProjectRecord>> {
        Ok(self.scan(options)?.collect())
    }

    /// Every `snowflake.yml` under `root`, sorted by full path.
    fn find_markers(&self, root: &Path, follow_symlinks: bool) -> Vec<PathBuf> {
        let mut markers = Vec::new();

        for entry in WalkDir::new(root).follow_links(follow_symlinks) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    self.observer.entry_skipped(&path, &io::Error::from(err));
                    continue;
                }
            };

            if entry.file_name() == SNOWFLAKE_PROJECT_FILE && is_marker_file(&entry) {
                markers.push(entry.into_path());
            }
        }

        markers.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        markers
    }
}

fn validate_root(options: &ScanOptions) -> Result<PathBuf> {
    let root = options.root().ok_or(LocatorError::RootNotConfigured)?;

    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(root.to_path_buf()),
        Ok(_) => Err(LocatorError::RootNotADirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(LocatorError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(LocatorError::RootInaccessible {
            path: root.to_path_buf(),
            source,
        }),
    }
}

// A symlinked marker only shows up as a symlink when links are not followed.
fn is_marker_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn describe_project(root: &Path, project_dir: &Path) -> io::Result<ProjectRecord> {
    let metadata = fs::metadata(project_dir)?;
    if !metadata.is_dir() {
        return Err(io::Error::other(format!(
            "{} is not a directory",
            project_dir.display()
        )));
    }
    // A stat still succeeds on a mode 000 directory; listing it does not.
    fs::read_dir(project_dir)?;

    let name = match project_dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        // Roots such as `.` or `..` have no file name of their own.
        None => {
            let resolved = fs::canonicalize(project_dir)?;
            resolved
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| resolved.display().to_string())
        }
    };

    let relative = project_dir.strip_prefix(root).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} is outside of {}",
                project_dir.display(),
                root.display()
            ),
        )
    })?;
    let path = if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.display().to_string()
    };

    Ok(ProjectRecord { name, path })
}

/// Lazy sequence of projects produced by [`ProjectLocator::scan`].
///
/// Single pass; call `scan` again for a fresh walk.
#[derive(Debug)]
pub struct Projects<'a, O> {
    root: PathBuf,
    markers: vec::IntoIter<PathBuf>,
    observer: &'a O,
}

impl<O> Projects<'_, O> {
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<O: ScanObserver> Iterator for Projects<'_, O> {
    type Item = ProjectRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for marker in self.markers.by_ref() {
            let Some(project_dir) = marker.parent() else {
                continue;
            };

            match describe_project(&self.root, project_dir) {
                Ok(record) => {
                    self.observer.project_found(&record);
                    return Some(record);
                }
                Err(err) => self.observer.entry_skipped(project_dir, &err),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.markers.len()))
    }
}

impl<O: ScanObserver> FusedIterator for Projects<'_, O> {}
