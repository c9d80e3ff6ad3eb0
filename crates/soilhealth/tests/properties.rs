//! Property tests for the expression engine.

use std::collections::HashMap;

use proptest::prelude::*;
use soilhealth::{InputValues, Operator, Parameter, ParameterKind, evaluate, resolve_all, tokenize};

const VARIABLES: [&str; 3] = ["a", "b", "c"];

/// An expression tree, rendered to text and evaluated directly.
#[derive(Debug, Clone)]
enum Node {
    Number(u8),
    Variable(usize),
    Binary(Operator, Box<Node>, Box<Node>),
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Sub),
        Just(Operator::Mul),
        Just(Operator::Div),
        Just(Operator::Pow),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (0u8..10).prop_map(Node::Number),
        (0usize..VARIABLES.len()).prop_map(Node::Variable),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (operator_strategy(), inner.clone(), inner)
            .prop_map(|(op, lhs, rhs)| Node::Binary(op, Box::new(lhs), Box::new(rhs)))
    })
}

fn precedence(op: Operator) -> u8 {
    op.precedence().unwrap_or(0)
}

/// Render with only the parentheses the precedence table requires.
fn render(node: &Node) -> String {
    match node {
        Node::Number(n) => n.to_string(),
        Node::Variable(i) => VARIABLES[*i].to_string(),
        Node::Binary(op, lhs, rhs) => {
            let p = precedence(*op);
            let right_assoc = op.is_right_associative();
            let left = wrap(lhs, |child| child < p || (child == p && right_assoc));
            let right = wrap(rhs, |child| child < p || (child == p && !right_assoc));
            format!("{left} {op} {right}")
        }
    }
}

fn wrap(node: &Node, needs_parens: impl Fn(u8) -> bool) -> String {
    match node {
        Node::Binary(op, _, _) if needs_parens(precedence(*op)) => format!("({})", render(node)),
        Node::Number(_) | Node::Variable(_) | Node::Binary(..) => render(node),
    }
}

fn direct_eval(node: &Node, env: &HashMap<String, f64>) -> f64 {
    match node {
        Node::Number(n) => f64::from(*n),
        Node::Variable(i) => env[VARIABLES[*i]],
        Node::Binary(op, lhs, rhs) => op.apply(direct_eval(lhs, env), direct_eval(rhs, env)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// RPN evaluation agrees with evaluating the tree the text was rendered from.
    #[test]
    fn prop_rpn_matches_tree(node in node_strategy(), a in -5.0f64..5.0, b in 0.5f64..4.0, c in 1u8..6) {
        let env: HashMap<String, f64> = HashMap::from([
            ("a".to_string(), a),
            ("b".to_string(), b),
            ("c".to_string(), f64::from(c)),
        ]);
        let text = render(&node);
        let expected = direct_eval(&node, &env);
        let actual = evaluate(&text, &env);
        prop_assert!(
            expected.to_bits() == actual.to_bits() || (expected.is_nan() && actual.is_nan()),
            "{text}: expected {expected}, got {actual}"
        );
    }

    /// Tokenizing arbitrary text never panics.
    #[test]
    fn prop_tokenize_total(text in "\\PC{0,24}") {
        let _ = tokenize(&text);
    }

    /// Resolution never panics and yields a value for every parameter.
    #[test]
    fn prop_resolve_all_total(expr in "[abc0-9+*/^() .$-]{0,20}") {
        let params = vec![
            Parameter::builder().id("a").build(),
            Parameter::builder().id("b").kind(ParameterKind::Computed).expression(expr.clone()).build(),
            Parameter::builder().id("c").kind(ParameterKind::Computed).expression("b + a".to_string()).build(),
        ];
        let inputs = InputValues::from([("a".to_string(), "2".to_string())]);
        let values = resolve_all(&params, &inputs);
        prop_assert_eq!(values.len(), 3);
        prop_assert_eq!(values.get("a"), Some(2.0));
    }
}
