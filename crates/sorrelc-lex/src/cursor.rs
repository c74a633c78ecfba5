//! Character cursor for traversing source text.
//!
//! This module provides the [`Cursor`] struct which maintains the scan
//! position while walking source text character by character. It decodes
//! UTF-8 correctly and supports exactly one level of undo, which is what
//! non-consuming lookahead is built from.

use crate::error::{LexError, LexResult};

/// A cursor over source text with single-character undo.
///
/// [`advance`](Cursor::advance) consumes one character and records its
/// encoded width; [`unread`](Cursor::unread) rewinds by exactly that width.
/// At most one `unread` is valid per `advance`; a second `unread` panics.
/// [`peek`](Cursor::peek) is advance followed by unread, so lookahead never
/// moves the observable position.
///
/// # Example
///
/// ```
/// use sorrelc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let");
/// assert_eq!(cursor.peek(), Ok('l'));
/// assert_eq!(cursor.advance(), Ok('l'));
/// assert_eq!(cursor.advance(), Ok('e'));
/// assert_eq!(cursor.position(), 2);
/// ```
pub struct Cursor<'a> {
    /// The source text being scanned.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Encoded width of the most recently consumed character.
    last_width: usize,

    /// Whether the recorded width may still be unread.
    can_unread: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of the given source text.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("let x = 42;");
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            last_width: 0,
            can_unread: false,
        }
    }

    /// Consumes and returns the next character.
    ///
    /// Decodes the Unicode scalar value at the current byte offset, moves
    /// the cursor forward by its encoded width, and records that width so a
    /// single [`unread`](Cursor::unread) can rewind it.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::EndOfInput`] when the cursor is at the end of the
    /// source. The cursor does not move on this failure.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    /// use sorrelc_lex::LexError;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), Ok('a'));
    /// assert_eq!(cursor.advance(), Ok('b'));
    /// assert_eq!(cursor.advance(), Err(LexError::EndOfInput));
    /// ```
    #[inline]
    pub fn advance(&mut self) -> LexResult<char> {
        if self.is_at_end() {
            return Err(LexError::EndOfInput);
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.position];
        let c = if b < 128 {
            b as char
        } else {
            // Slow path for UTF-8 multi-byte characters
            match self.source[self.position..].chars().next() {
                Some(c) => c,
                None => return Err(LexError::EndOfInput),
            }
        };

        self.last_width = c.len_utf8();
        self.position += self.last_width;
        self.can_unread = true;
        Ok(c)
    }

    /// Returns the next character without consuming it.
    ///
    /// Implemented as [`advance`](Cursor::advance) followed immediately by
    /// [`unread`](Cursor::unread), so the observable position never moves.
    /// The undo slot is spent afterwards; only a new `advance` re-arms it.
    ///
    /// # Errors
    ///
    /// Propagates [`LexError::EndOfInput`] from `advance` unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(), Ok('a'));
    /// assert_eq!(cursor.peek(), Ok('a'));
    /// assert_eq!(cursor.position(), 0);
    /// ```
    #[inline]
    pub fn peek(&mut self) -> LexResult<char> {
        let c = self.advance()?;
        self.unread();
        Ok(c)
    }

    /// Moves the cursor backward by the width recorded by the last
    /// [`advance`](Cursor::advance).
    ///
    /// # Panics
    ///
    /// Panics if no character has been consumed since the last `unread`,
    /// including the internal one inside [`peek`](Cursor::peek).
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), Ok('a'));
    /// cursor.unread();
    /// assert_eq!(cursor.advance(), Ok('a'));
    /// ```
    pub fn unread(&mut self) {
        assert!(
            self.can_unread,
            "unread called without a preceding advance"
        );
        self.position -= self.last_width;
        self.can_unread = false;
    }

    /// Skips past consecutive whitespace characters.
    ///
    /// Loops peek, classify, advance until the lookahead character is not
    /// whitespace, leaving the cursor immediately before that character.
    /// Unicode whitespace counts, not just ASCII spaces, tabs, and newlines.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::EndOfInput`] if the input runs out while
    /// skipping, which covers purely-whitespace input, empty input, and
    /// trailing whitespace with nothing after it. Callers scanning tokens
    /// treat that as clean termination, not a failure.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\nlet");
    /// assert_eq!(cursor.skip_whitespace(), Ok(()));
    /// assert_eq!(cursor.peek(), Ok('l'));
    /// ```
    pub fn skip_whitespace(&mut self) -> LexResult<()> {
        loop {
            let c = self.peek()?;
            if !c.is_whitespace() {
                return Ok(());
            }
            self.advance()?;
        }
    }

    /// Returns the current byte position in the source.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc");
    /// assert_eq!(cursor.position(), 0);
    /// cursor.advance().unwrap();
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor is at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance().unwrap();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the slice of source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// for _ in 0..3 {
    ///     cursor.advance().unwrap();
    /// }
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the slice of source between two byte positions.
    ///
    /// Both positions must lie on character boundaries, which holds for any
    /// position the cursor has reported.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("\"hi\"");
    /// assert_eq!(cursor.slice(1, 3), "hi");
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}
