//! Error handling module for the sorrelc driver.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver.

use thiserror::Error;

use sorrelc_lex::LexError;

/// Main error type for the sorrelc driver.
///
/// This enum represents all possible errors that can occur while
/// loading and scanning a source program.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error when the logging system cannot be initialized.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when scanning the source program fails.
    #[error("Scan error: {0}")]
    Lex(#[from] LexError),
}

/// Result type alias using DriverError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the driver.
pub type Result<T> = std::result::Result<T, DriverError>;
