mod csv;
mod json;

pub use csv::write_csv;
pub use json::write_json;

use crate::errors::AppResult;
use crate::models::Task;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write a task result set to `path` in the requested format.
pub fn export_tasks(path: &Path, format: &ExportFormat, tasks: &[&Task]) -> AppResult<()> {
    match format {
        ExportFormat::Csv => write_csv(path, tasks)?,
        ExportFormat::Json => write_json(path, tasks)?,
    }
    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
