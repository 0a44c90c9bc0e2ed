//! Error handling module for the numcheck CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use numlit_drv::DriverError;
use thiserror::Error;

/// Main error type for the numcheck CLI application.
#[derive(Error, Debug)]
pub enum NumcheckError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input is rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finished but did not fully succeed.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error raised while checking a file.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using NumcheckError.
pub type Result<T> = std::result::Result<T, NumcheckError>;
