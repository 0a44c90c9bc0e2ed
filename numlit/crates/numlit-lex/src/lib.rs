//! numlit-lex - Numeric Literal Recognizer
//!
//! This crate decides whether a single line of text is a syntactically valid
//! decimal numeric literal. It never converts the text to a number; it only
//! classifies it.
//!
//! # Overview
//!
//! Recognition is done by a deterministic finite-state machine with seven
//! states. Each character is classified ([`CharClass`]), the transition
//! table ([`State::step`]) picks the next state or rejects, and the input is
//! valid when it is fully consumed in an accepting state with at least one
//! mantissa digit seen.
//!
//! # Example Usage
//!
//! ```
//! use numlit_lex::{is_valid_numeric_literal, Recognizer};
//!
//! assert!(is_valid_numeric_literal("-0.5"));
//! assert!(!is_valid_numeric_literal("1.2.3"));
//!
//! // Ask why something was rejected
//! let scan = Recognizer::scan("1.2.3");
//! let reason = scan.reason().unwrap();
//! assert_eq!(
//!     reason.to_string(),
//!     "unexpected decimal point '.' at column 4, expected a digit or exponent"
//! );
//! ```
//!
//! # Grammar
//!
//! - **Integer**: `42`, `+7`, `-0`
//! - **Decimal**: `3.14`, `.5`, `-.25`, `5.`
//! - **Exponent**: `1e10`, `1E-5`, `2.5e+3`
//!
//! Not accepted: surrounding whitespace, hexadecimal or binary forms, digit
//! separators, `inf`/`NaN`, Unicode digits.
//!
//! # Module Structure
//!
//! - [`class`] - Character classification
//! - [`state`] - States and the transition table
//! - [`recognizer`] - The scanner and the boolean verdict
//! - [`cursor`] - Character cursor over the input line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod class;
pub mod cursor;
pub mod recognizer;
pub mod state;

mod edge_cases;

pub use class::CharClass;
pub use cursor::Cursor;
pub use recognizer::{is_valid_numeric_literal, InvalidReason, Recognizer, Rejection, Scan};
pub use state::{State, Step};

// Verdicts are computed per call and may be shared freely across threads.
static_assertions::assert_impl_all!(State: Copy, Send, Sync);
static_assertions::assert_impl_all!(CharClass: Copy, Send, Sync);
static_assertions::assert_impl_all!(Scan: Copy, Send, Sync);
static_assertions::assert_impl_all!(Recognizer<'static>: Send, Sync);
