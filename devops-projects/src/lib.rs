//! Snowflake project discovery.
//!
//! A Snowflake project is any directory containing a `snowflake.yml` file.
//! [`ProjectLocator::scan`] walks a root folder and lazily yields one
//! [`ProjectRecord`] per marker file, ordered by the marker's full path.

pub mod error;
pub mod locator;
pub mod observer;
pub mod options;
pub mod types;

pub use error::{LocatorError, Result};
pub use locator::{ProjectLocator, Projects};
pub use observer::{ScanObserver, TracingObserver};
pub use options::ScanOptions;
pub use types::{ProjectRecord, SNOWFLAKE_PROJECT_FILE};
