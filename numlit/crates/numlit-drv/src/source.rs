//! Line source.

use std::io::{self, BufRead};

/// Yields the lines of a reader one at a time.
///
/// Lines are raw bytes. Only the terminating `'\n'` is removed; a `'\r'` in
/// front of it stays part of the line, as does any other whitespace.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines yielded so far. Also the 1-based number of the last one.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        self.line_number += 1;
        Ok(Some(self.buf.clone()))
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(input: &[u8]) -> Vec<Vec<u8>> {
        LineSource::new(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn test_final_line_without_newline() {
        assert_eq!(lines(b"1\n2"), vec![b"1".to_vec(), b"2".to_vec()]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(lines(b"1\n2\n"), vec![b"1".to_vec(), b"2".to_vec()]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(lines(b"\n\n3\n"), vec![Vec::new(), Vec::new(), b"3".to_vec()]);
    }

    #[test]
    fn test_carriage_return_is_kept() {
        assert_eq!(lines(b"1\r\n2\r\n"), vec![b"1\r".to_vec(), b"2\r".to_vec()]);
    }

    #[test]
    fn test_invalid_utf8_is_kept() {
        assert_eq!(lines(b"1\xff\n"), vec![b"1\xff".to_vec()]);
    }

    #[test]
    fn test_line_number() {
        let mut source = LineSource::new(Cursor::new(b"a\nb\n".to_vec()));
        assert_eq!(source.line_number(), 0);
        source.next();
        source.next();
        assert_eq!(source.line_number(), 2);
        assert!(source.next().is_none());
        assert_eq!(source.line_number(), 2);
    }
}
