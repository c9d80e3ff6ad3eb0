//! Stack evaluation of postfix token sequences.

use std::collections::HashMap;

use crate::parser::{ExprError, Token, to_postfix, tokenize};

/// Evaluate a postfix token sequence against a variable environment.
///
/// Numbers push themselves, identifiers push their environment value (NaN when
/// absent) and each operator pops two operands. Arithmetic follows IEEE-754,
/// so division by zero yields an infinity or NaN rather than an error.
///
/// A malformed stream never panics. Stack underflow, an empty stream, a stray
/// parenthesis or anything other than exactly one value left at the end all
/// evaluate to NaN.
pub fn eval_postfix(tokens: &[Token], env: &HashMap<String, f64>) -> f64 {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Identifier(name) => stack.push(env.get(name).copied().unwrap_or(f64::NAN)),
            Token::Operator(op) => {
                if op.precedence().is_none() {
                    return f64::NAN;
                }
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return f64::NAN;
                };
                stack.push(op.apply(lhs, rhs));
            }
        }
    }
    match stack.as_slice() {
        [value] => *value,
        _ => f64::NAN,
    }
}

/// Tokenize, reorder and evaluate an expression in one step.
///
/// Syntax errors evaluate to NaN. Use [`Expression::parse`] when the error
/// itself is needed.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use soilhealth::evaluate;
///
/// let env = HashMap::from([("sand".to_string(), 40.0), ("clay".to_string(), 20.0)]);
/// assert_eq!(evaluate("(sand + clay) / 2", &env), 30.0);
/// assert!(evaluate("(sand", &env).is_nan());
/// ```
pub fn evaluate(expr: &str, env: &HashMap<String, f64>) -> f64 {
    match Expression::parse(expr) {
        Ok(expression) => expression.eval(env),
        Err(_) => f64::NAN,
    }
}

/// An expression parsed once and evaluated against any number of environments.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    postfix: Vec<Token>,
}

impl Expression {
    /// Parse an expression into postfix form.
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        let tokens = tokenize(source)?;
        let postfix = to_postfix(&tokens)?;
        Ok(Self {
            source: source.to_string(),
            postfix,
        })
    }

    /// The text this expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Every identifier the expression references, once each, in order of
    /// first appearance.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for token in &self.postfix {
            if let Token::Identifier(name) = token {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    pub fn eval(&self, env: &HashMap<String, f64>) -> f64 {
        eval_postfix(&self.postfix, env)
    }
}
