// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use devops_core::{devops_error, devops_error_hint};
use devops_messages::{messages::MESSAGES, msg};

// Local modules
mod cli;
mod commands;
mod error;
mod output;

use cli::Args;
use commands::execute_command;
use error::DevopsResult;

fn run(args: Args) -> DevopsResult<()> {
    let (config, source) = devops_config::load(args.config.as_deref())?;

    let mut log_settings = config.effective_log_settings();
    if args.debug {
        log_settings = log_settings.with_level("debug");
    }
    // Dropped at the end of `run`, which flushes any file logging.
    let _log_guard = devops_logging::init_subscriber(&log_settings);

    debug!(source = ?source, command = ?args.command, "Starting snow-devops command");
    execute_command(args, &config)
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        devops_error!("{}", msg!(MESSAGES.error_generic, error = e.to_string()));
        if let Some(hint) = e.hint() {
            devops_error_hint!("{}", hint);
        }
        std::process::exit(1);
    }
}
