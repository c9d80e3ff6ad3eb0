//! Expression tokenizer and parser.
//!
//! Turns an arithmetic expression such as `(sand + silt) / 2` into a token
//! sequence and reorders it into postfix form for stack evaluation.

pub mod error;
mod lexer;
mod postfix;
pub mod token;

pub use error::ExprError;
pub use lexer::tokenize;
pub use postfix::to_postfix;
pub use token::{Operator, Token};
