//! Token types produced by the tokenizer and consumed by the evaluator.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single lexical token of an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal such as `3` or `0.25`.
    Number(f64),
    /// A reference to a variable (parameter id).
    Identifier(String),
    /// An operator or parenthesis.
    Operator(Operator),
}

/// The single-character operators an expression may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    LeftParen,
    RightParen,
}

impl Operator {
    /// Map a character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            '(' => Some(Operator::LeftParen),
            ')' => Some(Operator::RightParen),
            _ => None,
        }
    }

    /// The character this operator is written as.
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
            Operator::LeftParen => '(',
            Operator::RightParen => ')',
        }
    }

    /// Binding strength of a binary operator. Parentheses have none.
    pub fn precedence(self) -> Option<u8> {
        match self {
            Operator::Pow => Some(4),
            Operator::Mul | Operator::Div => Some(3),
            Operator::Add | Operator::Sub => Some(2),
            Operator::LeftParen | Operator::RightParen => None,
        }
    }

    /// Only `^` groups to the right: `2^3^2` is `2^(3^2)`.
    pub fn is_right_associative(self) -> bool {
        self == Operator::Pow
    }

    /// Apply a binary operator with IEEE-754 semantics.
    ///
    /// Parentheses are not binary operators and yield NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
            Operator::Pow => lhs.powf(rhs),
            Operator::LeftParen | Operator::RightParen => f64::NAN,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_char())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Identifier(name) => write!(f, "{name}"),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}
