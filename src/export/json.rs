use crate::errors::{AppError, AppResult};
use crate::models::Task;
use std::path::Path;

/// Write the task rows as pretty-printed JSON.
pub fn write_json(path: &Path, tasks: &[&Task]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(tasks)
        .map_err(|e| AppError::Other(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
