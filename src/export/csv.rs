use crate::errors::AppResult;
use crate::models::Task;
use csv::WriterBuilder;
use std::path::Path;

/// Write the task rows to a CSV file with the table's own header row.
pub fn write_csv(path: &Path, tasks: &[&Task]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    wtr.write_record(Task::COLUMNS)?;
    for task in tasks {
        wtr.serialize(task)?;
    }

    wtr.flush()?;
    Ok(())
}
