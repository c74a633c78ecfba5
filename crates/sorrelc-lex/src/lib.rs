//! sorrelc-lex - Lexical Analyzer for the Sorrel Language
//!
//! This crate provides the scanner for Sorrel, a small expression-oriented
//! language built around `let` bindings. It turns source text into an
//! ordered sequence of classified tokens, stopping at the first character
//! it cannot classify.
//!
//! # Overview
//!
//! Scanning is a single forward pass: skip whitespace, peek one character,
//! route it to the matching reader, repeat. Each reader consumes a maximal
//! run of its character class and emits one token holding the verbatim
//! source text. The scan never throws accumulated work away: tokens read
//! before a failure are returned alongside the error.
//!
//! # Example Usage
//!
//! ```
//! use sorrelc_lex::{Lexer, TokenKind};
//!
//! let source = "let x = 10;";
//! let (tokens, error) = Lexer::new(source).tokenize();
//!
//! assert!(error.is_none());
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Identifier,
//!         TokenKind::Equals,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Scanning error types
//! - [`unicode`] - Character-class predicates
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `let` is the only reserved word.
//!
//! ## Identifiers
//!
//! Runs of Unicode letters or `_`, where the first character must be a
//! letter. Digits never appear inside identifiers: `x1` scans as `x`
//! followed by `1`.
//!
//! ## Literals
//!
//! - **Number**: runs of ASCII digits or `.`, shape unvalidated: `42`,
//!   `42.5`, `1.2.3`, and a lone `.` are all single tokens
//! - **String**: `"..."` with no escape sequences; the value excludes the
//!   quotes
//!
//! ## Operators and punctuation
//!
//! `=`, `+`, `-`, `;`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS};
pub use unicode::{is_ident_continue, is_ident_start, is_number_char};
