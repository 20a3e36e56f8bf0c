//! Unified application error type.
//! All modules (store, repo, session, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid task status: {0}")]
    InvalidStatus(String),

    #[error("Invalid work type: {0}")]
    InvalidWorkType(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Lookup misses
    // ---------------------------
    #[error("No task found with ID {0}")]
    TaskNotFound(u32),

    #[error("No equipment found with tag '{0}'")]
    TagNotFound(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Import column mismatch: {0}")]
    ColumnMismatch(String),

    // ---------------------------
    // Access control
    // ---------------------------
    #[error("Access denied: {0} requires the Admin role")]
    AccessDenied(String),

    #[error("Incorrect password")]
    BadCredentials,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
