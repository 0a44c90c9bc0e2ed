//! Numcheck CLI - Checks text files for valid numeric literals.
//!
//! This is the main entry point for the numcheck CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input. With no subcommand it runs the
//! interactive prompt loop.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_command, CheckArgs, CheckCommand, CommandDescription, InteractiveArgs,
    InteractiveCommand, ValidateArgs, ValidateCommand,
};
use config::Config;
use error::{NumcheckError, Result};

/// Numcheck - Check text files for valid numeric literals
///
/// Each line of an input file is classified as a valid or invalid numeric
/// literal. Results go to the console and to a derived output file.
#[derive(Parser, Debug)]
#[command(name = "numcheck")]
#[command(author = "Numlit Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check text files for valid numeric literals", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "NUMCHECK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "NUMCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "NUMCHECK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the numcheck CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = InteractiveCommand::description(), long_about = InteractiveCommand::help())]
    Interactive,

    #[command(about = CheckCommand::description(), long_about = CheckCommand::help())]
    Check(CheckOpts),

    #[command(about = ValidateCommand::description(), long_about = ValidateCommand::help())]
    Validate(ValidateOpts),
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOpts {
    /// Input files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Directory for output files (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Suffix appended to the input file stem (default: from config)
    #[arg(short, long)]
    suffix: Option<String>,

    /// Only write output files; print nothing per file
    #[arg(short, long)]
    quiet: bool,

    /// Summary format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the validate subcommand.
#[derive(Parser, Debug)]
struct ValidateOpts {
    /// Literals to classify
    #[arg(required = true, allow_hyphen_values = true)]
    literals: Vec<String>,

    /// Show why invalid literals were rejected
    #[arg(short, long)]
    explain: bool,
}

/// Main entry point for the numcheck CLI.
fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and
/// dispatches to the selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only results.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| NumcheckError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Option<Commands>, verbose: bool, config: Config) -> Result<()> {
    match command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => execute_interactive(verbose, config),
        Commands::Check(opts) => execute_check(opts, verbose, config),
        Commands::Validate(opts) => execute_validate(opts, config),
    }
}

/// Execute the interactive command.
fn execute_interactive(verbose: bool, config: Config) -> Result<()> {
    let args = InteractiveArgs { verbose };
    run_command::<InteractiveCommand>(args, config).map(|_| ())
}

/// Execute the check command.
fn execute_check(opts: CheckOpts, verbose: bool, config: Config) -> Result<()> {
    let args = CheckArgs {
        verbose,
        input: opts.input,
        output_dir: opts.output_dir,
        suffix: opts.suffix,
        quiet: opts.quiet,
        format: opts.format,
    };
    run_command::<CheckCommand>(args, config).map(|_| ())
}

/// Execute the validate command.
fn execute_validate(opts: ValidateOpts, config: Config) -> Result<()> {
    let args = ValidateArgs {
        literals: opts.literals,
        explain: opts.explain,
    };
    run_command::<ValidateCommand>(args, config).map(|_| ())
}
