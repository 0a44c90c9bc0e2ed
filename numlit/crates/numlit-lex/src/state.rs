//! Recognizer states and the transition table.
//!
//! The table is a total function from `(State, CharClass)` to either a
//! [`Step`] or a rejection (`None`). There is no state in which the machine
//! can get stuck without having rejected.
//!
//! | State          | digit                | sign          | `.`           | `e`/`E`  | other  |
//! |----------------|----------------------|---------------|---------------|----------|--------|
//! | Start          | Integer, digit       | Integer       | DecimalPoint  | reject   | reject |
//! | Integer        | Integer, digit       | reject        | AfterDecimal  | Exponent | reject |
//! | DecimalPoint   | AfterDecimal, digit  | reject        | reject        | reject   | reject |
//! | AfterDecimal   | AfterDecimal, digit  | reject        | reject        | Exponent | reject |
//! | Exponent       | ExponentDigits       | ExponentSign  | reject        | reject   | reject |
//! | ExponentSign   | ExponentDigits       | reject        | reject        | reject   | reject |
//! | ExponentDigits | ExponentDigits       | reject        | reject        | reject   | reject |
//!
//! "digit" marks transitions that count as a mantissa digit. Exponent digits
//! never do: `+e5` has no mantissa and is invalid.

use std::fmt;

use crate::class::CharClass;

/// A state of the numeric literal recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Nothing consumed yet.
    #[default]
    Start,
    /// Inside the integer part, possibly after a leading sign.
    Integer,
    /// A decimal point with no integer digits before it (`.`).
    DecimalPoint,
    /// Past the decimal point of the mantissa.
    AfterDecimal,
    /// Just consumed `e` or `E`.
    Exponent,
    /// Just consumed the exponent's sign.
    ExponentSign,
    /// Inside the exponent digits.
    ExponentDigits,
}

/// The result of a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The state to move to.
    pub next: State,
    /// Whether the consumed character is a digit of the mantissa.
    pub mantissa_digit: bool,
}

impl Step {
    const fn to(next: State) -> Self {
        Self {
            next,
            mantissa_digit: false,
        }
    }

    const fn digit(next: State) -> Self {
        Self {
            next,
            mantissa_digit: true,
        }
    }
}

impl State {
    /// Every state, in table row order.
    pub const ALL: [State; 7] = [
        State::Start,
        State::Integer,
        State::DecimalPoint,
        State::AfterDecimal,
        State::Exponent,
        State::ExponentSign,
        State::ExponentDigits,
    ];

    /// Applies one row of the transition table.
    ///
    /// Returns `None` when the character class is rejected in this state.
    ///
    /// # Example
    ///
    /// ```
    /// use numlit_lex::{CharClass, State};
    ///
    /// let step = State::Start.step(CharClass::Digit).unwrap();
    /// assert_eq!(step.next, State::Integer);
    /// assert!(step.mantissa_digit);
    ///
    /// assert!(State::Integer.step(CharClass::Sign).is_none());
    /// ```
    pub const fn step(self, class: CharClass) -> Option<Step> {
        use CharClass as C;
        use State as S;

        let step = match (self, class) {
            (_, C::Other) => return None,

            (S::Start, C::Digit) => Step::digit(S::Integer),
            (S::Start, C::Sign) => Step::to(S::Integer),
            (S::Start, C::DecimalPoint) => Step::to(S::DecimalPoint),
            (S::Start, C::ExponentMarker) => return None,

            (S::Integer, C::Digit) => Step::digit(S::Integer),
            (S::Integer, C::DecimalPoint) => Step::to(S::AfterDecimal),
            (S::Integer, C::ExponentMarker) => Step::to(S::Exponent),
            (S::Integer, C::Sign) => return None,

            (S::DecimalPoint, C::Digit) => Step::digit(S::AfterDecimal),
            (S::DecimalPoint, _) => return None,

            (S::AfterDecimal, C::Digit) => Step::digit(S::AfterDecimal),
            (S::AfterDecimal, C::ExponentMarker) => Step::to(S::Exponent),
            (S::AfterDecimal, _) => return None,

            (S::Exponent, C::Digit) => Step::to(S::ExponentDigits),
            (S::Exponent, C::Sign) => Step::to(S::ExponentSign),
            (S::Exponent, _) => return None,

            (S::ExponentSign, C::Digit) => Step::to(S::ExponentDigits),
            (S::ExponentSign, _) => return None,

            (S::ExponentDigits, C::Digit) => Step::to(S::ExponentDigits),
            (S::ExponentDigits, _) => return None,
        };

        Some(step)
    }

    /// Returns true if input may end in this state.
    ///
    /// Acceptance of the whole literal additionally requires that a mantissa
    /// digit was seen.
    pub const fn is_accepting(self) -> bool {
        matches!(
            self,
            State::Integer | State::AfterDecimal | State::ExponentDigits
        )
    }

    /// Describes what the machine is waiting for in this state.
    pub const fn expecting(self) -> &'static str {
        match self {
            State::Start => "a sign, digit or decimal point",
            State::Integer => "a digit, decimal point or exponent",
            State::DecimalPoint => "a digit after the decimal point",
            State::AfterDecimal => "a digit or exponent",
            State::Exponent => "an exponent sign or digit",
            State::ExponentSign => "an exponent digit",
            State::ExponentDigits => "an exponent digit",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Start => "start",
            State::Integer => "integer",
            State::DecimalPoint => "decimal point",
            State::AfterDecimal => "after decimal",
            State::Exponent => "exponent",
            State::ExponentSign => "exponent sign",
            State::ExponentDigits => "exponent digits",
        };
        f.write_str(name)
    }
}
