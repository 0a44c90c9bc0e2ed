//! Character cursor over a single input line.
//!
//! The recognizer consumes its input one character at a time. `Cursor`
//! keeps the byte offset and the 1-based column of the next character so
//! that a rejection can be reported at the exact place it happened.

/// A cursor for traversing one line of text character by character.
///
/// Unlike a general source cursor there is no line tracking: the input is a
/// single line and a `'\n'` inside it is just another character.
///
/// # Example
///
/// ```
/// use numlit_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("4.2");
///
/// assert_eq!(cursor.current_char(), Some('4'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('.'));
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current column (1-based, in characters).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned before the first character.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use numlit_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), None);
    /// ```
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (every character the grammar accepts)
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Returns the current character and advances past it.
    ///
    /// # Example
    ///
    /// ```
    /// use numlit_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("e5");
    /// assert_eq!(cursor.bump(), Some('e'));
    /// assert_eq!(cursor.bump(), Some('5'));
    /// assert_eq!(cursor.bump(), None);
    /// ```
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.advance();
        Some(c)
    }

    /// Returns the byte offset of the next character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the column of the next character (1-based).
    pub fn column(&self) -> usize {
        self.column
    }
}
