//! Unified application error type.
//! All modules (source, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid month: {0} (must be between 1 and 12)")]
    InvalidMonth(String),

    // ---------------------------
    // Log source
    // ---------------------------
    #[error("Log source error: {0}")]
    Source(String),

    #[error("Invalid log record: {0}")]
    InvalidRecord(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for errors caused by the user's year/month selection.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::InvalidYear(_) | AppError::InvalidMonth(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
