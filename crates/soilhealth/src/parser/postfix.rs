//! Shunting-yard conversion from infix to postfix (RPN) order.

use super::error::ExprError;
use super::token::{Operator, Token};

/// Convert an infix token sequence to postfix order.
///
/// Operands are emitted as they are seen. Operators wait on a stack until an
/// operator of lower binding strength (or a closing parenthesis) forces them
/// out, so `2 + 3 * 4` becomes `2 3 4 * +` and `2 ^ 3 ^ 2` becomes
/// `2 3 2 ^ ^`.
///
/// # Errors
///
/// Returns [`ExprError::MismatchedParentheses`] when a `)` has no matching
/// `(` or a `(` is still open at the end of input.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ExprError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Operator> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token.clone()),
            Token::Operator(Operator::LeftParen) => stack.push(Operator::LeftParen),
            Token::Operator(Operator::RightParen) => loop {
                match stack.pop() {
                    Some(Operator::LeftParen) => break,
                    Some(op) => output.push(Token::Operator(op)),
                    None => return Err(ExprError::MismatchedParentheses),
                }
            },
            Token::Operator(op) => {
                while let Some(&top) = stack.last() {
                    if !yields_to(top, *op) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(*op);
            }
        }
    }

    while let Some(op) = stack.pop() {
        if op == Operator::LeftParen {
            return Err(ExprError::MismatchedParentheses);
        }
        output.push(Token::Operator(op));
    }

    Ok(output)
}

/// Whether the operator on top of the stack must be emitted before `incoming`.
fn yields_to(top: Operator, incoming: Operator) -> bool {
    let (Some(top_prec), Some(incoming_prec)) = (top.precedence(), incoming.precedence()) else {
        return false;
    };
    top_prec > incoming_prec || (top_prec == incoming_prec && !incoming.is_right_associative())
}
