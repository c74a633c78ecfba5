//! Number literal reading.
//!
//! This module handles the maximal-run reading of numeric literals.

use crate::token::{Token, TokenKind};
use crate::unicode::is_number_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads a number literal.
    ///
    /// Consumes a maximal run of ASCII digits or `.`, starting with the
    /// character the dispatcher peeked. The run stops, without consuming,
    /// at the first character outside the class; end of input ends the run
    /// and the token is still emitted from whatever was consumed.
    ///
    /// No shape validation happens here: `1.2.3` and a lone `.` are single
    /// `Number` tokens. Rejecting malformed decimals is a parser concern.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        while let Ok(c) = self.cursor.peek() {
            if !is_number_char(c) {
                break;
            }
            let _ = self.cursor.advance();
        }

        Token::new(TokenKind::Number, self.cursor.slice_from(start))
    }
}
