//! The numeric literal recognizer.
//!
//! [`is_valid_numeric_literal`] is the boolean contract used by the driver.
//! [`Recognizer::scan`] runs the same machine but keeps enough information
//! to explain a negative verdict.

use std::fmt;

use crate::class::CharClass;
use crate::cursor::Cursor;
use crate::state::State;

/// Where and why the machine rejected a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// Column of the offending character (1-based, in characters).
    pub column: usize,
    /// Byte offset of the offending character.
    pub offset: usize,
    /// The offending character.
    pub ch: char,
    /// The state the machine was in when it saw `ch`.
    pub state: State,
}

/// Why a literal is not valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// A character was rejected before the input ended.
    UnexpectedChar(Rejection),
    /// The input ended in a non-accepting state.
    Incomplete(State),
    /// The input ended in an accepting state but no mantissa digit was seen.
    NoDigits,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::UnexpectedChar(r) => write!(
                f,
                "unexpected {} {:?} at column {}, expected {}",
                CharClass::of(r.ch),
                r.ch,
                r.column,
                r.state.expecting()
            ),
            InvalidReason::Incomplete(State::Start) => f.write_str("empty input"),
            InvalidReason::Incomplete(state) => {
                write!(f, "input ends early, expected {}", state.expecting())
            }
            InvalidReason::NoDigits => f.write_str("no digits in mantissa"),
        }
    }
}

/// The outcome of scanning one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// State after the last consumed character.
    pub state: State,
    /// Whether at least one mantissa digit was consumed.
    pub has_digit: bool,
    /// Set if scanning stopped on a rejected character.
    pub rejection: Option<Rejection>,
}

impl Scan {
    /// The verdict: true iff the input is a valid numeric literal.
    pub fn is_valid(&self) -> bool {
        self.reason().is_none()
    }

    /// Returns why the input is invalid, or `None` if it is valid.
    pub fn reason(&self) -> Option<InvalidReason> {
        if let Some(rejection) = self.rejection {
            return Some(InvalidReason::UnexpectedChar(rejection));
        }
        if !self.state.is_accepting() {
            return Some(InvalidReason::Incomplete(self.state));
        }
        if !self.has_digit {
            return Some(InvalidReason::NoDigits);
        }
        None
    }
}

/// A single-use run of the state machine over one input.
///
/// Each call to [`Recognizer::scan`] builds a fresh recognizer, so nothing
/// is shared between inputs or threads.
#[derive(Debug)]
pub struct Recognizer<'a> {
    cursor: Cursor<'a>,
    state: State,
    has_digit: bool,
}

impl<'a> Recognizer<'a> {
    /// Creates a recognizer in the `Start` state.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            state: State::Start,
            has_digit: false,
        }
    }

    /// Scans `input` and returns the detailed outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use numlit_lex::{InvalidReason, Recognizer, State};
    ///
    /// assert!(Recognizer::scan("-0.5e10").is_valid());
    ///
    /// let scan = Recognizer::scan("1e+");
    /// assert_eq!(scan.reason(), Some(InvalidReason::Incomplete(State::ExponentSign)));
    /// ```
    pub fn scan(input: &'a str) -> Scan {
        Recognizer::new(input).run()
    }

    /// Consumes the input, stopping at the first rejected character.
    pub fn run(mut self) -> Scan {
        let rejection = loop {
            let (offset, column) = (self.cursor.position(), self.cursor.column());
            let Some(ch) = self.cursor.bump() else {
                break None;
            };

            match self.state.step(CharClass::of(ch)) {
                Some(step) => {
                    self.state = step.next;
                    self.has_digit |= step.mantissa_digit;
                }
                None => {
                    break Some(Rejection {
                        column,
                        offset,
                        ch,
                        state: self.state,
                    })
                }
            }
        };

        Scan {
            state: self.state,
            has_digit: self.has_digit,
            rejection,
        }
    }
}

/// Returns true iff `input` is a valid numeric literal.
///
/// Accepts optionally signed integers, decimals and exponent forms. The
/// input is not trimmed: surrounding whitespace makes it invalid.
///
/// # Example
///
/// ```
/// use numlit_lex::is_valid_numeric_literal;
///
/// assert!(is_valid_numeric_literal("+123"));
/// assert!(is_valid_numeric_literal(".5"));
/// assert!(is_valid_numeric_literal("1E-5"));
/// assert!(!is_valid_numeric_literal("1e"));
/// assert!(!is_valid_numeric_literal(" 1"));
/// ```
pub fn is_valid_numeric_literal(input: &str) -> bool {
    Recognizer::scan(input).is_valid()
}
