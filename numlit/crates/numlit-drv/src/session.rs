//! Checking sessions.
//!
//! A [`Session`] carries the output options and turns one input file into
//! one output file, one verdict per line.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use numlit_lex::Recognizer;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{DriverError, Result};
use crate::output::{output_path_for, quote_path, DriverOptions};
use crate::sink::{ResultSink, TeeSink};
use crate::source::LineSource;

/// Line counts for one input.
///
/// Serializes as `lines`, `valid` and the derived `invalid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Lines read.
    pub lines: usize,
    /// Lines that are valid numeric literals.
    pub valid: usize,
}

impl Tally {
    /// Lines that are not valid numeric literals.
    pub fn invalid(&self) -> usize {
        self.lines - self.valid
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tally", 3)?;
        state.serialize_field("lines", &self.lines)?;
        state.serialize_field("valid", &self.valid)?;
        state.serialize_field("invalid", &self.invalid())?;
        state.end()
    }
}

/// Summary of one processed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// The input file.
    pub input: PathBuf,
    /// The output file that was written.
    pub output: PathBuf,
    /// Line counts.
    #[serde(flatten)]
    pub tally: Tally,
}

/// A checking session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: DriverOptions,
}

impl Session {
    /// Creates a session with the given options.
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    /// Returns the session options.
    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Checks every line of `reader` and hands each verdict to `sink`.
    pub fn check_lines<R: BufRead, S: ResultSink + ?Sized>(
        &self,
        reader: R,
        sink: &mut S,
    ) -> Result<Tally> {
        let mut tally = Tally::default();
        let mut source = LineSource::new(reader);

        while let Some(line) = source.next() {
            let line = line?;
            // Bytes that are not UTF-8 decode to U+FFFD, which never fits the grammar.
            let text = String::from_utf8_lossy(&line);
            let scan = Recognizer::scan(&text);
            let valid = scan.is_valid();

            if let Some(reason) = scan.reason() {
                debug!(line = source.line_number(), %text, %reason, "rejected");
            }

            sink.record(&line, valid)?;
            tally.lines += 1;
            tally.valid += usize::from(valid);
        }

        sink.finish()?;
        Ok(tally)
    }

    /// Checks the file at `input`, writing results to the derived output file
    /// and, if echo is enabled, to `console`.
    ///
    /// On success a closing line naming the output file is written to
    /// `console`.
    pub fn process_file<W: Write>(&self, input: &Path, console: &mut W) -> Result<FileReport> {
        let reader = open_input(input)?;

        let output = output_path_for(input, &self.options);
        if is_same_file(input, &output) {
            return Err(DriverError::OutputIsInput { path: output });
        }

        let record = File::create(&output).map_err(|source| DriverError::CreateOutput {
            path: output.clone(),
            source,
        })?;

        debug!(input = %input.display(), output = %output.display(), "checking file");

        let mut sink =
            TeeSink::new(&mut *console, BufWriter::new(record)).with_echo(self.options.echo);
        let tally = self.check_lines(BufReader::new(reader), &mut sink)?;
        drop(sink);

        let name = input.file_name().map(Path::new).unwrap_or(input);
        writeln!(
            console,
            "Results for {} have been written to {}",
            quote_path(name),
            quote_path(&output)
        )?;

        info!(
            input = %input.display(),
            lines = tally.lines,
            valid = tally.valid,
            "file checked"
        );

        Ok(FileReport {
            input: input.to_path_buf(),
            output,
            tally,
        })
    }
}

fn open_input(path: &Path) -> Result<File> {
    let open_error = |source| DriverError::OpenInput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    // Directories open fine on some platforms but cannot be read as lines.
    if file.metadata().map_err(open_error)?.is_dir() {
        return Err(open_error(io::Error::from(io::ErrorKind::IsADirectory)));
    }
    Ok(file)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockResultSink;
    use mockall::Sequence;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_check_lines_in_order() {
        let session = Session::default();
        let mut sink = MockResultSink::new();
        let mut seq = Sequence::new();

        for (text, verdict) in [("12", true), ("1e", false), (".5", true)] {
            sink.expect_record()
                .withf(move |line, valid| {
                    line.to_vec() == text.as_bytes().to_vec() && *valid == verdict
                })
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        sink.expect_finish()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let tally = session
            .check_lines(Cursor::new("12\n1e\n.5\n"), &mut sink)
            .unwrap();
        assert_eq!(tally, Tally { lines: 3, valid: 2 });
        assert_eq!(tally.invalid(), 1);
    }

    #[test]
    fn test_check_lines_empty_input() {
        let session = Session::default();
        let mut sink = MockResultSink::new();
        sink.expect_record().never();
        sink.expect_finish().times(1).returning(|| Ok(()));

        let tally = session.check_lines(Cursor::new(""), &mut sink).unwrap();
        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn test_check_lines_sink_error_stops() {
        let session = Session::default();
        let mut sink = MockResultSink::new();
        sink.expect_record().times(1).returning(|_, _| {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        });
        sink.expect_finish().never();

        let result = session.check_lines(Cursor::new("1\n2\n"), &mut sink);
        assert!(matches!(result, Err(DriverError::Io(_))));
    }

    #[test]
    fn test_process_file_writes_output_and_console() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("numbers.txt");
        fs::write(&input, "42\nabc\n").unwrap();

        let mut console = Vec::new();
        let report = Session::default().process_file(&input, &mut console).unwrap();

        assert_eq!(report.output, dir.path().join("numbers_output.txt"));
        assert_eq!(report.tally, Tally { lines: 2, valid: 1 });

        let written = fs::read_to_string(&report.output).unwrap();
        assert_eq!(
            written,
            "42 is a valid numeric literal\nabc is NOT a valid numeric literal\n"
        );

        let console = String::from_utf8(console).unwrap();
        assert!(console.starts_with(&written));
        assert!(console.ends_with(&format!(
            "Results for \"numbers.txt\" have been written to {}\n",
            quote_path(&report.output)
        )));
    }

    #[test]
    fn test_process_file_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.txt");

        let mut console = Vec::<u8>::new();
        let err = Session::default()
            .process_file(&input, &mut console)
            .unwrap_err();

        assert!(matches!(err, DriverError::OpenInput { .. }));
        assert!(console.is_empty());
        assert!(!dir.path().join("absent_output.txt").exists());
    }

    #[test]
    fn test_process_file_directory_input() {
        let dir = TempDir::new().unwrap();

        let err = Session::default()
            .process_file(dir.path(), &mut Vec::<u8>::new())
            .unwrap_err();

        assert!(matches!(err, DriverError::OpenInput { .. }));
    }

    #[test]
    fn test_process_file_refuses_to_overwrite_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("same.txt");
        fs::write(&input, "1\n").unwrap();

        let session = Session::new(DriverOptions {
            output_suffix: String::new(),
            ..DriverOptions::default()
        });
        let err = session.process_file(&input, &mut Vec::<u8>::new()).unwrap_err();

        assert!(matches!(err, DriverError::OutputIsInput { .. }));
        assert_eq!(fs::read_to_string(&input).unwrap(), "1\n");
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = FileReport {
            input: PathBuf::from("a.txt"),
            output: PathBuf::from("a_output.txt"),
            tally: Tally { lines: 3, valid: 1 },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": "a.txt",
                "output": "a_output.txt",
                "lines": 3,
                "valid": 1,
                "invalid": 2,
            })
        );
    }
}
