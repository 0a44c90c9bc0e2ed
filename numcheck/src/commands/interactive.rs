//! Interactive command implementation.
//!
//! Prompts for input file names until the user types `done` (or input
//! ends), checking each named file as it is entered.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use numlit_drv::{quote_path, FileReport, Session};
use tracing::debug;

use crate::commands::common::{error_messages, output_messages, strip_line_ending};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{NumcheckError, Result};

/// Arguments for the interactive command.
#[derive(Debug, Clone, Default)]
pub struct InteractiveArgs {
    /// Enable verbose output.
    pub verbose: bool,
}

/// Interactive command handler.
pub struct InteractiveCommand {
    args: InteractiveArgs,
    config: Config,
}

impl InteractiveCommand {
    /// Run the prompt loop over the given streams.
    ///
    /// File errors are written to `err` and the loop carries on. Only a
    /// failure to use the streams themselves ends the loop with an error.
    pub fn run_with<R: BufRead, W: Write, E: Write>(
        &self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<Vec<FileReport>> {
        let cwd = std::env::current_dir().map_err(|e| {
            NumcheckError::FileOperation(format!("{} {}", error_messages::NO_CURRENT_DIR, e))
        })?;
        writeln!(out, "{} {}", output_messages::CURRENT_DIR, quote_path(&cwd))?;

        let session = Session::new(self.config.output.driver_options());
        let mut reports = Vec::new();
        let mut line = String::new();

        loop {
            write!(out, "\n{}", output_messages::PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input acts like `done`.
                writeln!(out)?;
                break;
            }

            let name = strip_line_ending(&line);
            if name == output_messages::DONE {
                break;
            }

            let path = match std::path::absolute(name) {
                Ok(path) => path,
                Err(e) => {
                    debug!(input = name, error = %e, "cannot resolve path");
                    writeln!(
                        err,
                        "{} {}",
                        error_messages::INVALID_FILE_PATH,
                        quote_path(&PathBuf::from(name))
                    )?;
                    continue;
                }
            };

            writeln!(out, "{} {}", output_messages::PROCESSING_FILE, quote_path(&path))?;

            match session.process_file(&path, out) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    debug!(input = %path.display(), error = %e, "file not checked");
                    writeln!(err, "{}", e)?;
                }
            }
        }

        writeln!(out, "\n{}", output_messages::ALL_PROCESSED)?;

        if self.args.verbose {
            tracing::info!(files = reports.len(), "interactive session finished");
        }
        Ok(reports)
    }
}

impl Command for InteractiveCommand {
    type Args = InteractiveArgs;
    type Output = Vec<FileReport>;

    fn with_config(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
    }

    fn name() -> &'static str {
        "interactive"
    }
}

impl CommandDescription for InteractiveCommand {
    fn description() -> &'static str {
        "Prompt for files to check (the default)"
    }

    fn help() -> &'static str {
        "Prompts for input file names one at a time and checks each file as \
         it is entered. Type 'done' to finish."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(script: &str) -> (Vec<FileReport>, String, String) {
        let command = InteractiveCommand::with_config(InteractiveArgs::default(), Config::default());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let reports = command
            .run_with(Cursor::new(script.to_string()), &mut out, &mut err)
            .unwrap();
        (
            reports,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_done_immediately() {
        let (reports, out, err) = run("done\n");
        assert!(reports.is_empty());
        assert!(err.is_empty());
        assert!(out.starts_with("Current working directory: \""));
        assert_eq!(out.matches(output_messages::PROMPT).count(), 1);
        assert!(out.ends_with("\nAll files have been processed.\n"));
    }

    #[test]
    fn test_end_of_input_finishes() {
        let (reports, out, _) = run("");
        assert!(reports.is_empty());
        assert!(out.ends_with("\nAll files have been processed.\n"));
    }

    #[test]
    fn test_processes_files_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "10\n").unwrap();
        std::fs::write(&second, "1.\n").unwrap();

        let script = format!("{}\n{}\ndone\n", first.display(), second.display());
        let (reports, out, _) = run(&script);

        assert_eq!(reports.len(), 2);
        assert_eq!(out.matches(output_messages::PROMPT).count(), 3);

        let first_at = out.find("10 is a valid numeric literal").unwrap();
        let second_at = out.find("1. is a valid numeric literal").unwrap();
        assert!(first_at < second_at);
        assert!(out.contains(&format!("Processing file: {}", quote_path(&first))));
    }

    #[test]
    fn test_missing_file_does_not_stop_loop() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let present = dir.path().join("present.txt");
        std::fs::write(&present, "+\n").unwrap();

        let script = format!("{}\n{}\n", missing.display(), present.display());
        let (reports, out, err) = run(&script);

        assert_eq!(reports.len(), 1);
        assert!(err.contains("Error opening input file:"));
        assert!(out.contains("+ is NOT a valid numeric literal"));
    }

    #[test]
    fn test_empty_name_is_reported() {
        let (reports, _, err) = run("\ndone\n");
        assert!(reports.is_empty());
        assert!(!err.is_empty());
    }
}
