//! Result sinks.

use std::io::{self, Write};

use crate::output::verdict_text;

/// Receives the verdict for each line, in input order.
#[cfg_attr(test, mockall::automock)]
pub trait ResultSink {
    /// Records one line, as read, and its verdict.
    fn record(&mut self, line: &[u8], valid: bool) -> io::Result<()>;

    /// Flushes anything buffered. Called once after the last line.
    fn finish(&mut self) -> io::Result<()>;
}

/// Writes every rendered result to a console and to a record file.
///
/// The line is written back byte for byte, followed by the verdict text.
/// The console copy can be switched off; the record copy is always written.
pub struct TeeSink<C, F> {
    console: C,
    record: F,
    echo: bool,
}

impl<C: Write, F: Write> TeeSink<C, F> {
    /// Creates a sink writing to both destinations.
    pub fn new(console: C, record: F) -> Self {
        Self {
            console,
            record,
            echo: true,
        }
    }

    /// Enables or disables the console copy.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Returns the two writers.
    pub fn into_inner(self) -> (C, F) {
        (self.console, self.record)
    }
}

impl<C: Write, F: Write> ResultSink for TeeSink<C, F> {
    fn record(&mut self, line: &[u8], valid: bool) -> io::Result<()> {
        let text = verdict_text(valid);
        if self.echo {
            self.console.write_all(line)?;
            writeln!(self.console, "{}", text)?;
        }
        self.record.write_all(line)?;
        writeln!(self.record, "{}", text)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.record.flush()
    }
}
