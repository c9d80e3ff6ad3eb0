//! Miette diagnostic wrapper for expression errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use soilhealth::ExprError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing into an expression.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(soilhealth::expression))]
pub struct ExprDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,

    label: String,

    #[help]
    help: Option<String>,
}

impl ExprDiagnostic {
    /// Create a diagnostic from an ExprError with the expression it came from.
    pub fn from_expr_error(name: &str, expression: &str, err: &ExprError) -> Self {
        let (span, label, help): (SourceSpan, &str, Option<String>) = match err {
            ExprError::InvalidCharacter {
                character,
                position,
            } => {
                // Convert the character index to a byte offset.
                let offset = expression
                    .char_indices()
                    .nth(*position)
                    .map_or(expression.len(), |(offset, _)| offset);
                (
                    (offset, character.len_utf8()).into(),
                    "not allowed here",
                    Some("expressions may use numbers, parameter ids, + - * / ^ and parentheses".into()),
                )
            }
            ExprError::MismatchedParentheses => (
                (0, expression.len()).into(),
                "in this expression",
                Some("every '(' needs a matching ')'".into()),
            ),
        };

        ExprDiagnostic {
            src: NamedSource::new(name, expression.to_string()),
            span,
            message: err.to_string(),
            label: label.to_string(),
            help,
        }
    }
}
