use crate::error::DevopsResult;
use crate::output::{CommandResult, Row};
use devops_messages::{messages::MESSAGES, msg};
use devops_projects::{ProjectLocator, ProjectRecord, ScanOptions};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

pub fn handle_list_projects(root_folder: &Path, follow_symlinks: bool) -> DevopsResult<CommandResult> {
    let locator = ProjectLocator::new();
    let options = ScanOptions::new()
        .with_root(root_folder)
        .follow_symlinks(follow_symlinks);

    let rows: Vec<Row> = locator.scan(&options)?.map(|p| project_row(&p)).collect();
    debug!(count = rows.len(), "project discovery finished");

    Ok(CommandResult::Collection {
        rows,
        empty: msg!(
            MESSAGES.projects_list_empty,
            root = root_folder.display().to_string()
        ),
    })
}

fn project_row(record: &ProjectRecord) -> Row {
    IndexMap::from([
        ("name".to_string(), record.name.clone()),
        ("path".to_string(), record.path.clone()),
    ])
}
