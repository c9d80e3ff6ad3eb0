//! Integration tests for tokenizing and postfix conversion.

use soilhealth::{ExprError, Operator, Token, to_postfix, tokenize};

fn postfix_text(expr: &str) -> String {
    let tokens = to_postfix(&tokenize(expr).unwrap()).unwrap();
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Tokenizer
// =============================================================================

#[test]
fn tokenize_mixed_expression() {
    let tokens = tokenize("x_1 + 2.5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("x_1".into()),
            Token::Operator(Operator::Add),
            Token::Number(2.5),
        ]
    );
}

#[test]
fn tokenize_skips_spaces_and_tabs() {
    let tokens = tokenize(" \t(a)\t").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Operator(Operator::LeftParen),
            Token::Identifier("a".into()),
            Token::Operator(Operator::RightParen),
        ]
    );
}

#[test]
fn tokenize_empty_string() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize("   ").unwrap(), vec![]);
}

#[test]
fn tokenize_number_forms() {
    assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
    assert_eq!(tokenize("12").unwrap(), vec![Token::Number(12.0)]);
    assert_eq!(tokenize("3.").unwrap(), vec![Token::Number(3.0)]);
}

#[test]
fn tokenize_identifier_starting_with_underscore() {
    assert_eq!(
        tokenize("_base2").unwrap(),
        vec![Token::Identifier("_base2".into())]
    );
}

#[test]
fn tokenize_number_followed_by_letters_splits() {
    assert_eq!(
        tokenize("2e3").unwrap(),
        vec![Token::Number(2.0), Token::Identifier("e3".into())]
    );
}

#[test]
fn tokenize_every_operator() {
    let ops: Vec<Token> = tokenize("+-*/^()").unwrap();
    assert_eq!(
        ops,
        vec![
            Token::Operator(Operator::Add),
            Token::Operator(Operator::Sub),
            Token::Operator(Operator::Mul),
            Token::Operator(Operator::Div),
            Token::Operator(Operator::Pow),
            Token::Operator(Operator::LeftParen),
            Token::Operator(Operator::RightParen),
        ]
    );
}

#[test]
fn tokenize_rejects_invalid_character() {
    assert_eq!(
        tokenize("a$b"),
        Err(ExprError::InvalidCharacter {
            character: '$',
            position: 1,
        })
    );
}

#[test]
fn tokenize_position_counts_characters_not_bytes() {
    assert_eq!(
        tokenize("a + é"),
        Err(ExprError::InvalidCharacter {
            character: 'é',
            position: 4,
        })
    );
}

#[test]
fn tokenize_rejects_lone_dot() {
    assert_eq!(
        tokenize("1 + ."),
        Err(ExprError::InvalidCharacter {
            character: '.',
            position: 4,
        })
    );
}

#[test]
fn invalid_character_message() {
    let err = tokenize("ph % 2").unwrap_err();
    assert_eq!(err.to_string(), "invalid character '%' at position 3");
}

// =============================================================================
// Postfix conversion
// =============================================================================

#[test]
fn postfix_respects_precedence() {
    assert_eq!(postfix_text("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_text("2*3+4"), "2 3 * 4 +");
}

#[test]
fn postfix_left_associative_operators() {
    assert_eq!(postfix_text("8-3-2"), "8 3 - 2 -");
    assert_eq!(postfix_text("8/4*2"), "8 4 / 2 *");
}

#[test]
fn postfix_power_is_right_associative() {
    assert_eq!(postfix_text("2^3^2"), "2 3 2 ^ ^");
}

#[test]
fn postfix_parentheses_group_first() {
    assert_eq!(postfix_text("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix_text("((a))"), "a");
}

#[test]
fn postfix_unclosed_parenthesis() {
    let tokens = tokenize("(1+2").unwrap();
    assert_eq!(to_postfix(&tokens), Err(ExprError::MismatchedParentheses));
}

#[test]
fn postfix_unopened_parenthesis() {
    let tokens = tokenize("1+2)").unwrap();
    assert_eq!(to_postfix(&tokens), Err(ExprError::MismatchedParentheses));

    let tokens = tokenize(")(").unwrap();
    assert_eq!(to_postfix(&tokens), Err(ExprError::MismatchedParentheses));
}
