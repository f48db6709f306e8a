//! Unified application error type.
//! All modules (store, forms, dashboard, export, config) return AppError to
//! keep the error handling consistent and easy to manage.

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
    // Validation errors
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid grade: {0}")]
    InvalidGrade(String),

    // ---------------------------
    // Shell / resolution errors
    // ---------------------------
    #[error("No registered volunteer matches '{0}'")]
    UnknownVolunteer(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Login failed")]
    LoginFailed,

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

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
