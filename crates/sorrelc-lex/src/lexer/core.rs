//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct and the `tokenize`
//! dispatch loop that drives the token readers.

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode;

/// Lexer for the Sorrel language.
///
/// The lexer borrows source text and scans it into tokens in a single
/// forward pass. Scanning is synchronous and performs no I/O; each instance
/// owns its cursor exclusively, so independent instances can scan in
/// parallel without coordination.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    ///
    /// The input may be arbitrary UTF-8 text, including the empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::Lexer;
    ///
    /// let mut lexer = Lexer::new("let x = 10;");
    /// let (tokens, error) = lexer.tokenize();
    /// assert_eq!(tokens.len(), 5);
    /// assert!(error.is_none());
    /// ```
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Scans the entire input into an ordered token sequence.
    ///
    /// Tokens accumulate in source order until end of input or the first
    /// error, and whatever has accumulated is always returned: paired with
    /// `None` on success, with the stopping error otherwise. Running out of
    /// input at a token boundary is the success path; end of input only
    /// surfaces as an error from inside an unterminated string literal.
    ///
    /// # Example
    ///
    /// ```
    /// use sorrelc_lex::{Lexer, LexError, TokenKind};
    ///
    /// let (tokens, error) = Lexer::new("a # b").tokenize();
    /// assert_eq!(tokens.len(), 1);
    /// assert_eq!(tokens[0].kind, TokenKind::Identifier);
    /// assert_eq!(error, Some(LexError::UnknownToken('#')));
    /// ```
    pub fn tokenize(&mut self) -> (Vec<Token>, Option<LexError>) {
        let mut tokens = Vec::new();

        loop {
            // Exhausting the input while skipping whitespace is the normal
            // end of the scan, not a failure.
            if self.cursor.skip_whitespace().is_err() {
                return (tokens, None);
            }

            let c = match self.cursor.peek() {
                Ok(c) => c,
                // End of input at a token boundary is clean termination.
                Err(_) => return (tokens, None),
            };

            let result = match c {
                '=' => Ok(self.lex_single_char(TokenKind::Equals)),
                '+' => Ok(self.lex_single_char(TokenKind::Plus)),
                '-' => Ok(self.lex_single_char(TokenKind::Minus)),
                ';' => Ok(self.lex_single_char(TokenKind::Semicolon)),
                '"' => self.lex_string(),
                c if unicode::is_number_char(c) => Ok(self.lex_number()),
                c if unicode::is_ident_start(c) => Ok(self.lex_identifier()),
                c => Err(LexError::UnknownToken(c)),
            };

            match result {
                Ok(token) => tokens.push(token),
                Err(e) => return (tokens, Some(e)),
            }
        }
    }

    /// Consumes one character and emits it as a token of the given kind.
    ///
    /// Precondition: the dispatcher has peeked the character, so the
    /// advance cannot fail.
    fn lex_single_char(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        let _ = self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }
}
