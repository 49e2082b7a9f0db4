//! Rendering of command results.
//!
//! Commands return a [`CommandResult`]; how it is printed depends only on the
//! selected [`OutputFormat`].

use crate::error::DevopsResult;
use devops_config::OutputFormat;
use indexmap::IndexMap;

/// One row of a collection result, columns in insertion order.
pub type Row = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// A single line of text
    Message(String),
    /// Tabular data; `empty` is shown in table mode when there are no rows
    Collection { rows: Vec<Row>, empty: String },
}

pub fn render(result: &CommandResult, format: OutputFormat) -> DevopsResult<String> {
    match (result, format) {
        (CommandResult::Message(text), OutputFormat::Table) => Ok(text.clone()),
        (CommandResult::Message(text), OutputFormat::Json) => {
            Ok(serde_json::to_string_pretty(&serde_json::json!({ "message": text }))?)
        }
        (CommandResult::Collection { rows, .. }, OutputFormat::Json) => {
            Ok(serde_json::to_string_pretty(rows)?)
        }
        (CommandResult::Collection { rows, empty }, OutputFormat::Table) => {
            if rows.is_empty() {
                Ok(empty.clone())
            } else {
                Ok(render_table(rows))
            }
        }
    }
}

fn render_table(rows: &[Row]) -> String {
    let columns: Vec<&String> = rows.first().map(|r| r.keys().collect()).unwrap_or_default();

    let widths: Vec<usize> = columns
        .iter()
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(*column))
                .map(|value| value.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(columns.iter().map(|c| c.as_str()).collect()));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(format_line(
            columns
                .iter()
                .map(|column| row.get(*column).map(String::as_str).unwrap_or(""))
                .collect(),
        ));
    }
    lines.join("\n")
}
