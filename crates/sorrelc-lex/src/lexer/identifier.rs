//! Identifier and keyword reading.
//!
//! This module handles the maximal-run reading of identifiers and their
//! promotion to keywords.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads an identifier or keyword.
    ///
    /// Consumes a maximal run of Unicode letters or `_`. The dispatcher has
    /// only peeked the first character; this reader performs the first
    /// advance itself. The run stops, without consuming, at the first
    /// character outside the class, and end of input ends the run with the
    /// token still emitted, so an identifier at the very end of the source
    /// is fine.
    ///
    /// After the run, the exact text is checked against the keyword table:
    /// `let` becomes a `Let` token, anything else an `Identifier`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while let Ok(c) = self.cursor.peek() {
            if !is_ident_continue(c) {
                break;
            }
            let _ = self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text)
    }
}
