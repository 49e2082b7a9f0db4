// CLI argument parsing and definitions

use clap::{Parser, Subcommand};
use devops_config::OutputFormat;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "snow-devops")]
#[command(about = "Manages DevOps workflows with Snowflake")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a custom configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format [default: configured format, else table]
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Says hello to someone
    Greet {
        /// Name to greet
        #[arg(short, long, default_value = "Jane")]
        name: String,
    },
    /// Says goodbye to someone
    Goodbye {
        /// Name to say goodbye to
        #[arg(short, long, default_value = "Jane")]
        name: String,
    },
    /// Lists all Snowflake projects found in the specified root folder.
    ///
    /// A Snowflake project is identified by the presence of a snowflake.yml file.
    ListProjects {
        /// Root folder to search for Snowflake projects
        #[arg(short, long, value_parser = existing_directory)]
        root_folder: PathBuf,

        /// Descend into symlinked directories [default: configured value, else false]
        #[arg(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            value_name = "BOOL"
        )]
        follow_symlinks: Option<bool>,
    },
}

/// Accept only existing directories, resolved to an absolute path.
fn existing_directory(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("Directory '{value}' does not exist."));
    }
    if !path.is_dir() {
        return Err(format!("Directory '{value}' is a file."));
    }
    fs::canonicalize(&path).map_err(|e| format!("Could not resolve '{value}': {e}"))
}
