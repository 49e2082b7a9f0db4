use serde::{Deserialize, Serialize};

/// File whose presence marks a directory as a Snowflake project.
pub const SNOWFLAKE_PROJECT_FILE: &str = "snowflake.yml";

/// A discovered project: the directory name and its path relative to the
/// scan root (`"."` for the root itself).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub path: String,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
