//! Expression tokenizer using winnow.
//!
//! Splits an expression into numbers, identifiers and single-character
//! operators. Spaces and tabs separate tokens and are otherwise ignored.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

use super::error::ExprError;
use super::token::{Operator, Token};

/// Tokenize an expression string.
///
/// # Errors
///
/// Returns [`ExprError::InvalidCharacter`] carrying the first character that
/// starts no valid token and its zero-based character position.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, ExprError> {
    let mut remaining = expr;
    let mut tokens = Vec::new();
    loop {
        remaining = remaining.trim_start_matches([' ', '\t']);
        let Some(character) = remaining.chars().next() else {
            break;
        };
        let start = remaining;
        match token(&mut remaining) {
            Ok(t) => tokens.push(t),
            Err(_) => {
                return Err(ExprError::InvalidCharacter {
                    character,
                    position: char_position(expr, start),
                });
            }
        }
    }
    Ok(tokens)
}

/// Character index of `remaining` within `original`.
fn char_position(original: &str, remaining: &str) -> usize {
    let consumed = original.len() - remaining.len();
    original[..consumed].chars().count()
}

/// Parse a single token.
fn token(input: &mut &str) -> ModalResult<Token> {
    alt((number, identifier, operator)).parse_next(input)
}

/// Parse a number: digits with at most one decimal point, or `.5` style.
fn number(input: &mut &str) -> ModalResult<Token> {
    alt(((digit1, opt(('.', digit0))).take(), ('.', digit1).take()))
        .try_map(str::parse::<f64>)
        .map(Token::Number)
        .parse_next(input)
}

/// Parse an identifier: a letter or underscore, then letters, digits or underscores.
fn identifier(input: &mut &str) -> ModalResult<Token> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .map(|name: &str| Token::Identifier(name.to_string()))
        .parse_next(input)
}

/// Parse one of `+ - * / ^ ( )`.
fn operator(input: &mut &str) -> ModalResult<Token> {
    any.verify_map(Operator::from_char)
        .map(Token::Operator)
        .parse_next(input)
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
