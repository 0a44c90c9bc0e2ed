//! Command trait and common types for the numcheck CLI.
//!
//! This module defines the standard command traits that all commands
//! must implement to ensure consistency across the application.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all numcheck commands must implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given configuration.
    fn with_config(args: Self::Args, config: Config) -> Self;

    /// Execute the command against the process's standard streams.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}

/// Build a command from its arguments and configuration and execute it.
pub fn run_command<C: Command>(args: C::Args, config: Config) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "executing");
    C::with_config(args, config).execute()
}
