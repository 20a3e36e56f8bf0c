//! The Record Store: sole owner of the two in-memory tables, mirrored to two
//! CSV files with full-file overwrite semantics. Repositories borrow the
//! store, mutate it, and must commit with `save()` before their operation is
//! considered complete.

pub mod log;
pub mod seed;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Equipment, Task};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    pub equipment: Vec<Equipment>,
    pub tasks: Vec<Task>,
    equipment_path: PathBuf,
    task_path: PathBuf,
    oplog_path: PathBuf,
}

impl RecordStore {
    /// One-time initialization at process start: read each table from its
    /// CSV if present, otherwise materialize the seed dataset and persist it
    /// immediately. Values are kept as strings exactly as they sit on disk.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        fs::create_dir_all(&cfg.data_dir)?;

        let equipment_path = cfg.equipment_path();
        let task_path = cfg.task_path();

        let equipment = if equipment_path.exists() {
            read_table::<Equipment>(&equipment_path)?
        } else {
            let rows = seed::equipment();
            write_table(&equipment_path, &Equipment::COLUMNS, &rows)?;
            rows
        };

        let tasks = if task_path.exists() {
            read_table::<Task>(&task_path)?
        } else {
            let rows = seed::tasks();
            write_table(&task_path, &Task::COLUMNS, &rows)?;
            rows
        };

        Ok(Self {
            equipment,
            tasks,
            equipment_path,
            task_path,
            oplog_path: cfg.oplog_path(),
        })
    }

    /// Serialize both tables in full, truncating the previous files. A write
    /// failure surfaces as an error and leaves the in-memory tables as they
    /// were.
    pub fn save(&self) -> AppResult<()> {
        write_table(&self.equipment_path, &Equipment::COLUMNS, &self.equipment)?;
        write_table(&self.task_path, &Task::COLUMNS, &self.tasks)?;
        Ok(())
    }

    /// Append one line to the operation log.
    pub fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::append(&self.oplog_path, operation, target, message)
    }

    pub fn oplog_path(&self) -> &Path {
        &self.oplog_path
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}

/// Headers are written explicitly so an empty table still round-trips with
/// its column order intact.
fn write_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
