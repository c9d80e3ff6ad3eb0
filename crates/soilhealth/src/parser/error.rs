//! Parse error types for expressions.

use thiserror::Error;

/// A structural error found while tokenizing or parsing one expression.
///
/// These are the only errors the engine raises. Everything after parsing
/// degrades to NaN instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// A character that starts no valid token.
    ///
    /// `position` is the zero-based character index into the expression.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A `)` without a matching `(`, or a `(` left open at end of input.
    #[error("mismatched parentheses")]
    MismatchedParentheses,
}
