//! Check command implementation.
//!
//! Checks every line of each input file and writes one output file per
//! input, continuing past files that cannot be processed.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use numlit_drv::{quote_path, DriverOptions, FileReport, Session};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{error_messages, output_messages, ReportFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{NumcheckError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to check.
    pub input: Vec<PathBuf>,
    /// Directory for output files.
    pub output_dir: Option<PathBuf>,
    /// Suffix appended to each input file stem.
    pub suffix: Option<String>,
    /// Write results to output files only.
    pub quiet: bool,
    /// Summary format specification.
    pub format: Option<String>,
}

/// A file that could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    /// The input file as given.
    pub input: PathBuf,
    /// What went wrong.
    pub error: String,
}

/// Outcome of a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Files that were checked.
    pub files: Vec<FileReport>,
    /// Files that could not be checked.
    pub failed: Vec<FailedFile>,
}

impl CheckSummary {
    /// Total lines over all checked files.
    pub fn lines(&self) -> usize {
        self.files.iter().map(|f| f.tally.lines).sum()
    }

    /// Total valid lines over all checked files.
    pub fn valid(&self) -> usize {
        self.files.iter().map(|f| f.tally.valid).sum()
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Execute the command, writing results to `out` and failures to `err`.
    pub fn run_with<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<CheckSummary> {
        let start_time = Instant::now();
        let format = self.determine_report_format()?;
        let session = Session::new(self.driver_options());

        let summary = if self.args.quiet {
            self.process_all_files(&session, &mut io::sink(), err)?
        } else {
            self.process_all_files(&session, out, err)?
        };

        self.log_completion(start_time.elapsed(), &summary, err)?;

        if format == ReportFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }

        self.check_for_failures(&summary)?;
        Ok(summary)
    }

    /// Get the effective driver options.
    pub fn driver_options(&self) -> DriverOptions {
        let mut options = self.config.output.driver_options();

        if let Some(ref dir) = self.args.output_dir {
            options.output_dir = Some(dir.clone());
        }

        if let Some(ref suffix) = self.args.suffix {
            options.output_suffix = suffix.clone();
        }

        if self.args.quiet {
            options.echo = false;
        }

        options
    }

    /// Determine the summary format.
    fn determine_report_format(&self) -> Result<ReportFormat> {
        match self.args.format {
            Some(ref format) => format.parse(),
            None => self.config.report.format.parse(),
        }
    }

    /// Process all input files, collecting reports and failures.
    fn process_all_files<W: Write, E: Write>(
        &self,
        session: &Session,
        out: &mut W,
        err: &mut E,
    ) -> Result<CheckSummary> {
        let mut summary = CheckSummary::default();

        for input_path in &self.args.input {
            writeln!(
                out,
                "{} {}",
                output_messages::PROCESSING_FILE,
                quote_path(&absolute_or_given(input_path))
            )?;

            match session.process_file(input_path, out) {
                Ok(report) => summary.files.push(report),
                Err(e) => {
                    debug!(input = %input_path.display(), error = %e, "file not checked");
                    writeln!(err, "{}", e)?;
                    summary.failed.push(FailedFile {
                        input: input_path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }

    /// Log completion statistics if verbose.
    fn log_completion<E: Write>(
        &self,
        elapsed: std::time::Duration,
        summary: &CheckSummary,
        err: &mut E,
    ) -> Result<()> {
        info!(
            files = summary.files.len(),
            failed = summary.failed.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "check finished"
        );

        if self.args.verbose {
            writeln!(
                err,
                "{} {} checked, {} failed",
                output_messages::FILES_CHECKED,
                summary.files.len(),
                summary.failed.len()
            )?;
            writeln!(
                err,
                "{} {} valid, {} invalid",
                output_messages::LINES_CHECKED,
                summary.valid(),
                summary.lines() - summary.valid()
            )?;
        }
        Ok(())
    }

    /// Return an error if any file could not be checked.
    fn check_for_failures(&self, summary: &CheckSummary) -> Result<()> {
        if !summary.failed.is_empty() {
            return Err(NumcheckError::CommandExecution(format!(
                "{} {} {}",
                summary.failed.len(),
                error_messages::FILES_FAILED,
                summary
                    .failed
                    .iter()
                    .map(|f| f.input.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        Ok(())
    }
}

/// Returns the absolute form of `path` for display, or `path` itself if that fails.
fn absolute_or_given(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn with_config(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check files for valid numeric literals"
    }

    fn help() -> &'static str {
        "Checks every line of each input file and writes the verdicts to \
         <name>_output.txt next to the input (or in --output-dir). Files that \
         cannot be read are reported and skipped."
    }
}
