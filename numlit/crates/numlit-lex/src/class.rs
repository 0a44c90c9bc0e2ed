//! Character classification.

use std::fmt;

/// The class of a single input character, as seen by the state machine.
///
/// Only ASCII characters ever fall into a class other than [`CharClass::Other`].
/// Unicode digits such as `'٣'` are deliberately `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `0`-`9`
    Digit,
    /// `+` or `-`
    Sign,
    /// `.`
    DecimalPoint,
    /// `e` or `E`
    ExponentMarker,
    /// Anything else, including whitespace.
    Other,
}

impl CharClass {
    /// Every class, in table column order.
    pub const ALL: [CharClass; 5] = [
        CharClass::Digit,
        CharClass::Sign,
        CharClass::DecimalPoint,
        CharClass::ExponentMarker,
        CharClass::Other,
    ];

    /// Classifies a character.
    ///
    /// # Example
    ///
    /// ```
    /// use numlit_lex::CharClass;
    ///
    /// assert_eq!(CharClass::of('7'), CharClass::Digit);
    /// assert_eq!(CharClass::of('E'), CharClass::ExponentMarker);
    /// assert_eq!(CharClass::of(' '), CharClass::Other);
    /// ```
    #[inline]
    pub const fn of(c: char) -> Self {
        match c {
            '0'..='9' => CharClass::Digit,
            '+' | '-' => CharClass::Sign,
            '.' => CharClass::DecimalPoint,
            'e' | 'E' => CharClass::ExponentMarker,
            _ => CharClass::Other,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Digit => "digit",
            CharClass::Sign => "sign",
            CharClass::DecimalPoint => "decimal point",
            CharClass::ExponentMarker => "exponent marker",
            CharClass::Other => "other character",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for c in '0'..='9' {
            assert_eq!(CharClass::of(c), CharClass::Digit);
        }
    }

    #[test]
    fn test_signs_point_and_exponent() {
        assert_eq!(CharClass::of('+'), CharClass::Sign);
        assert_eq!(CharClass::of('-'), CharClass::Sign);
        assert_eq!(CharClass::of('.'), CharClass::DecimalPoint);
        assert_eq!(CharClass::of('e'), CharClass::ExponentMarker);
        assert_eq!(CharClass::of('E'), CharClass::ExponentMarker);
    }

    #[test]
    fn test_other() {
        for c in [' ', '\t', '\r', '\0', 'a', 'x', ',', '_', '٣', '\u{FFFD}'] {
            assert_eq!(CharClass::of(c), CharClass::Other, "{:?}", c);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CharClass::DecimalPoint.to_string(), "decimal point");
        assert_eq!(CharClass::Other.to_string(), "other character");
    }
}
