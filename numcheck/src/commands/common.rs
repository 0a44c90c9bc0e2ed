//! Common types and utilities for numcheck commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fmt;
use std::str::FromStr;

use crate::error::NumcheckError;

// ============================================================================
// Report Format
// ============================================================================

/// Supported summary formats for the check command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human readable, results only
    #[default]
    Text,
    /// A JSON document after all files are processed
    Json,
}

impl FromStr for ReportFormat {
    type Err = NumcheckError;

    /// Parses a format name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(NumcheckError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

// ============================================================================
// Input Handling
// ============================================================================

/// Removes the line terminator from a line typed at the prompt.
///
/// Only `"\n"` or `"\r\n"` is removed; other whitespace is part of the name.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when an unknown report format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown report format:";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to process:";

    /// Error when the working directory cannot be determined.
    pub const NO_CURRENT_DIR: &str = "Cannot determine current working directory:";

    /// Error when a typed name cannot be turned into a path.
    pub const INVALID_FILE_PATH: &str = "Invalid file path:";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Printed once when the interactive loop starts.
    pub const CURRENT_DIR: &str = "Current working directory:";

    /// The interactive prompt.
    pub const PROMPT: &str = "Enter an input file name (or full path), or type 'done' to finish: ";

    /// Word that ends the interactive loop.
    pub const DONE: &str = "done";

    /// Printed before each file is checked.
    pub const PROCESSING_FILE: &str = "Processing file:";

    /// Printed when the interactive loop ends.
    pub const ALL_PROCESSED: &str = "All files have been processed.";

    /// Message showing file counts after a batch check.
    pub const FILES_CHECKED: &str = "📊 Files:";

    /// Message showing line counts after a batch check.
    pub const LINES_CHECKED: &str = "📊 Lines:";
}
