//! Append-only operation log, one line per mutating operation:
//! `rfc3339 | operation | target | message`

use crate::errors::AppResult;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn append(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{} | {} | {} | {}",
        Local::now().to_rfc3339(),
        operation,
        target,
        message
    )?;
    Ok(())
}

pub fn read_all(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    let mut out = Vec::new();
    for line in content.lines() {
        let mut parts = line.splitn(4, " | ");
        let date = parts.next().unwrap_or("").to_string();
        let operation = parts.next().unwrap_or("").to_string();
        let target = parts.next().unwrap_or("").to_string();
        let message = parts.next().unwrap_or("").to_string();
        out.push(LogEntry {
            date,
            operation,
            target,
            message,
        });
    }
    Ok(out)
}
