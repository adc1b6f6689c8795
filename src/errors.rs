//! Unified application error type.
//! All modules (db, store, core, export, import, cli) return AppError to keep
//! the error handling consistent and easy to manage.
//!
//! The calculators in `core::calculator` never return errors: they fall back
//! to neutral values (0 minutes, empty string) and log a warning instead.

use std::io;
use thiserror::Error;

/// Reasons a CSV import is rejected. None of them touches the record set.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImportError {
    #[error("Unsupported file extension (expected .csv): {0}")]
    WrongExtension(String),

    #[error("The file is empty")]
    EmptyFile,

    #[error("Missing expected columns in header: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No valid rows found in file")]
    NoValidRows,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Stored records are corrupt: {0}")]
    CorruptState(String),

    // ---------------------------
    // Parsing errors (user input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected YYYY-MM or MM/YYYY)")]
    InvalidMonth(String),

    // ---------------------------
    // Store / business rules
    // ---------------------------
    #[error("Record store used before being loaded")]
    StoreNotLoaded,

    #[error("No record found with id {0}")]
    RecordNotFound(String),

    #[error("Record id prefix '{0}' matches more than one record")]
    AmbiguousRecordId(String),

    #[error("A record for {0} already exists")]
    DuplicateDate(chrono::NaiveDate),

    #[error("Unknown schedule: {0}")]
    UnknownSchedule(String),

    #[error("All {limit} business days of {month:02}/{year} already have a record")]
    DayQuotaReached { month: u32, year: i32, limit: u32 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
