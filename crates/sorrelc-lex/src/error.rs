//! Error types for lexical scanning.
//!
//! The scanner has exactly two failure modes: running out of input and
//! meeting a character that starts no token class. Both are modeled here
//! with `thiserror`.

use thiserror::Error;

/// Error type for scanning operations.
///
/// `EndOfInput` doubles as a sentinel: cursor primitives return it whenever
/// no character is available, and [`Lexer::tokenize`](crate::Lexer::tokenize)
/// treats it as clean termination when it occurs at a token boundary. Only
/// inside a string literal does it surface to callers as a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// No further characters are available.
    #[error("end of input reached")]
    EndOfInput,

    /// The character at the cursor starts none of the recognized token
    /// classes.
    #[error("unknown token: unexpected character {0:?}")]
    UnknownToken(char),
}

/// Result type alias for scanning operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
