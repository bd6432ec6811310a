//! Unified application error type.
//! All modules (db, core, server, cli) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation errors (request-level)
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Both 'from' and 'to' are required for a summary")]
    MissingRange,

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

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
    // Server errors
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by the caller's input rather than by the
    /// store or the runtime.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::MissingRange
                | AppError::InvalidEvent(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
