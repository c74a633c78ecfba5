//! String literal reading.
//!
//! This module handles the reading of quoted string literals.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads a string literal.
    ///
    /// Consumes the opening `"` the dispatcher peeked, then every character
    /// up to and including the closing `"`. The token value is the text
    /// strictly between the quotes. No escape processing is applied, so a
    /// string cannot contain `"` itself; everything else, including
    /// newlines, passes through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`EndOfInput`](crate::LexError::EndOfInput) if the input ends
    /// before a closing quote. An unterminated literal is reported the same
    /// way as running out of input.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        // Opening quote, already peeked by the dispatcher.
        let _ = self.cursor.advance();
        let start = self.cursor.position();

        loop {
            let quote_pos = self.cursor.position();
            if self.cursor.advance()? == '"' {
                return Ok(Token::new(
                    TokenKind::String,
                    self.cursor.slice(start, quote_pos),
                ));
            }
        }
    }
}
