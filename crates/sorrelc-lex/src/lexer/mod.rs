//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Main Lexer struct and the tokenize dispatch loop
//! - `identifier` - Identifier and keyword reading
//! - `number` - Number literal reading
//! - `string` - String literal reading

mod core;
mod identifier;
mod number;
mod string;

pub use core::Lexer;
