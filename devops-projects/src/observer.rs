use std::{io, path::Path};

use tracing::{debug, warn};

use crate::types::ProjectRecord;

/// Receives progress and diagnostics from a scan.
pub trait ScanObserver {
    fn search_started(&self, _root: &Path) {}

    fn project_found(&self, _record: &ProjectRecord) {}

    /// An entry could not be read or resolved and was left out.
    fn entry_skipped(&self, path: &Path, error: &io::Error);
}

/// Forwards scan events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn search_started(&self, root: &Path) {
        debug!(root = %root.display(), "searching for Snowflake projects");
    }

    fn project_found(&self, record: &ProjectRecord) {
        debug!(name = %record.name, path = %record.path, "found project");
    }

    fn entry_skipped(&self, path: &Path, error: &io::Error) {
        warn!(path = %path.display(), "could not access project: {error}");
    }
}
