//! Command modules for the numcheck CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod interactive;
pub mod validate;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use interactive::{InteractiveArgs, InteractiveCommand};
pub use traits::{run_command, CommandDescription};
pub use validate::{ValidateArgs, ValidateCommand};
