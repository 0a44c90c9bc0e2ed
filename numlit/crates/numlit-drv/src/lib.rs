//! numlit-drv - Checking Driver
//!
//! Reads text line by line, runs each line through the numeric literal
//! recognizer and reports the verdicts to the console and to a derived
//! output file.
//!
//! ```no_run
//! use std::path::Path;
//! use numlit_drv::{DriverOptions, Session};
//!
//! let session = Session::new(DriverOptions::default());
//! let report = session.process_file(Path::new("numbers.txt"), &mut std::io::stdout())?;
//! println!("{} of {} lines valid", report.tally.valid, report.tally.lines);
//! # Ok::<(), numlit_drv::DriverError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod output;
pub mod session;
pub mod sink;
pub mod source;

pub use error::{DriverError, Result};
pub use output::{
    output_path_for, quote_path, render_result, verdict_text, DriverOptions,
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_SUFFIX,
};
pub use session::{FileReport, Session, Tally};
pub use sink::{ResultSink, TeeSink};
pub use source::LineSource;
