//! Token definitions for the Sorrel lexer.
//!
//! A token pairs a [`TokenKind`] with the exact source text that produced
//! it. Keywords are resolved through the static [`KEYWORDS`] table after an
//! identifier run has been consumed; reserving a new word means adding a
//! table entry.

use std::fmt;

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The `let` keyword.
    Let,
    /// An identifier: a run of Unicode letters or `_` that is not reserved.
    Identifier,
    /// A numeric literal: a run of ASCII digits or `.`, shape unvalidated.
    Number,
    /// A string literal. The token value excludes the quotes.
    String,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `=`
    Equals,
    /// `;`
    Semicolon,
}

/// A classified, verbatim piece of source text.
///
/// `value` holds the exact substring that produced the token with no
/// decoding applied; string tokens exclude their delimiting quotes. Tokens
/// are created by the scanner and never mutated afterwards.
///
/// # Example
///
/// ```
/// use sorrelc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Number, "42.5");
/// assert_eq!(token.kind, TokenKind::Number);
/// assert_eq!(token.value, "42.5");
/// assert_eq!(token.to_string(), "Number(\"42.5\")");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The exact source text of the token.
    pub value: String,
    /// The lexical class of the token.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token of the given kind from its source text.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.value)
    }
}

/// Reserved identifier spellings and the kinds they map to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[("let", TokenKind::Let)];

/// Looks up the token kind reserved for an identifier spelling.
///
/// Returns `None` when the text is an ordinary identifier. Matching is
/// exact and case-sensitive: `Let` and `LET` are identifiers.
///
/// # Example
///
/// ```
/// use sorrelc_lex::token::keyword_from_ident;
/// use sorrelc_lex::TokenKind;
///
/// assert_eq!(keyword_from_ident("let"), Some(TokenKind::Let));
/// assert_eq!(keyword_from_ident("letter"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(text, _)| *text == ident)
        .map(|&(_, kind)| kind)
}
