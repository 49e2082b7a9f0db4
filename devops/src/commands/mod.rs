// Command handlers for snow-devops

use crate::cli::{Args, Command};
use crate::error::DevopsResult;
use crate::output::{self, CommandResult};
use devops_config::DevopsConfig;
use devops_core::devops_println;
use tracing::debug;

// Individual command modules
pub mod goodbye;
pub mod greet;
pub mod projects;

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args, config: &DevopsConfig) -> DevopsResult<()> {
    let format = args.format.unwrap_or(config.output.format);

    let result: CommandResult = match args.command {
        Command::Greet { name } => {
            debug!("Handling greet command");
            greet::handle_greet(&name)
        }
        Command::Goodbye { name } => {
            debug!("Handling goodbye command");
            goodbye::handle_goodbye(&name)
        }
        Command::ListProjects {
            root_folder,
            follow_symlinks,
        } => {
            debug!(root = %root_folder.display(), "Handling list-projects command");
            projects::handle_list_projects(
                &root_folder,
                follow_symlinks.unwrap_or(config.projects.follow_symlinks),
            )?
        }
    };

    devops_println!("{}", output::render(&result, format)?);
    Ok(())
}
