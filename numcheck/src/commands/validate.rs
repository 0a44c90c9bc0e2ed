//! Validate command implementation.
//!
//! Classifies literals given directly on the command line.

use std::io::{self, Write};

use numlit_drv::{render_result, Tally};
use numlit_lex::Recognizer;

use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the validate command.
#[derive(Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Literals to classify.
    pub literals: Vec<String>,
    /// Append the rejection reason to invalid results.
    pub explain: bool,
}

/// Validate command handler.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Classify every literal, writing one result line each to `out`.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<Tally> {
        let mut tally = Tally::default();

        for literal in &self.args.literals {
            let scan = Recognizer::scan(literal);
            let valid = scan.is_valid();

            match scan.reason() {
                Some(reason) if self.args.explain => {
                    writeln!(out, "{} ({})", render_result(literal, valid), reason)?
                }
                _ => writeln!(out, "{}", render_result(literal, valid))?,
            }

            tally.lines += 1;
            tally.valid += usize::from(valid);
        }

        Ok(tally)
    }
}

impl Command for ValidateCommand {
    type Args = ValidateArgs;
    type Output = Tally;

    fn with_config(args: Self::Args, _config: Config) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run_with(&mut io::stdout().lock())
    }

    fn name() -> &'static str {
        "validate"
    }
}

impl CommandDescription for ValidateCommand {
    fn description() -> &'static str {
        "Classify literals given as arguments"
    }

    fn help() -> &'static str {
        "Prints one result line per argument, in the same form used for \
         files. Nothing is written to disk."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(literals: &[&str], explain: bool) -> (Tally, String) {
        let command = ValidateCommand::with_config(
            ValidateArgs {
                literals: literals.iter().map(|s| s.to_string()).collect(),
                explain,
            },
            Config::default(),
        );
        let mut out = Vec::new();
        let tally = command.run_with(&mut out).unwrap();
        (tally, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_validate_plain() {
        let (tally, out) = run(&["-0.5", "1e+"], false);
        assert_eq!(tally, Tally { lines: 2, valid: 1 });
        assert_eq!(
            out,
            "-0.5 is a valid numeric literal\n1e+ is NOT a valid numeric literal\n"
        );
    }

    #[test]
    fn test_validate_explain() {
        let (_, out) = run(&["12", "1.2.3"], true);
        assert_eq!(
            out,
            "12 is a valid numeric literal\n\
             1.2.3 is NOT a valid numeric literal \
             (unexpected decimal point '.' at column 4, expected a digit or exponent)\n"
        );
    }

    #[test]
    fn test_validate_nothing() {
        let (tally, out) = run(&[], false);
        assert_eq!(tally, Tally::default());
        assert!(out.is_empty());
    }
}
