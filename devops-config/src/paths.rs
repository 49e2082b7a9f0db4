//! Well-known configuration locations.

use std::path::PathBuf;

/// Directory shared with the Snowflake CLI configuration.
pub const CONFIG_DIR_NAME: &str = ".snowflake";

pub const CONFIG_FILE_NAME: &str = "devops.yaml";

/// Default configuration file, `~/.snowflake/devops.yaml`.
///
/// Returns `None` when the home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
