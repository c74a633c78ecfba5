//! Character classes for the Sorrel lexer.
//!
//! This module defines the predicates the dispatcher and the token readers
//! share, so the dispatch decision and the maximal-run loops agree on what
//! belongs to each token class.

/// Checks if a character can start an identifier.
///
/// Only Unicode letters qualify. Underscore can continue an identifier but
/// cannot start one, so a leading `_` is rejected by the dispatcher as an
/// unknown token.
///
/// # Example
///
/// ```
/// use sorrelc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('α'));  // Greek alpha
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// Unicode letters and underscore. Digits are not identifier characters in
/// Sorrel: `x1` scans as the identifier `x` followed by the number `1`.
///
/// # Example
///
/// ```
/// use sorrelc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('中'));  // CJK
/// assert!(!is_ident_continue('1'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character belongs to the number class.
///
/// ASCII digits and `.`, for the first character and the rest of the run
/// alike. The scanner does not validate decimal shape, so `1.2.3` and a
/// lone `.` are single Number tokens.
///
/// # Example
///
/// ```
/// use sorrelc_lex::unicode::is_number_char;
///
/// assert!(is_number_char('0'));
/// assert!(is_number_char('9'));
/// assert!(is_number_char('.'));
/// assert!(!is_number_char('e'));
/// assert!(!is_number_char('-'));
/// ```
pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
