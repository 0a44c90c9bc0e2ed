//! Driver errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::output::quote_path;

/// Errors raised while processing an input file.
///
/// None of these are fatal to a batch: the caller reports them and moves on
/// to the next file.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input file could not be opened.
    #[error("Error opening input file: {}", quote_path(.path))]
    OpenInput {
        /// The input path as given.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },

    /// The derived output file could not be created.
    #[error("Error creating output file: {}", quote_path(.path))]
    CreateOutput {
        /// The derived output path.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },

    /// The derived output path names the input file itself.
    #[error("Output file would overwrite the input file: {}", quote_path(.path))]
    OutputIsInput {
        /// The offending path.
        path: PathBuf,
    },

    /// Reading a line or writing a result failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_open_input_display() {
        let err = DriverError::OpenInput {
            path: PathBuf::from("/data/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Error opening input file: \"/data/missing.txt\""
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_create_output_display() {
        let err = DriverError::CreateOutput {
            path: PathBuf::from("/ro/in_output.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Error creating output file: \"/ro/in_output.txt\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
