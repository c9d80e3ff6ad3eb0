//! Integration tests for dependency resolution.

use soilhealth::interpreter::{ResolveContext, index_parameters, resolve_parameter};
use soilhealth::types::parse_input;
use soilhealth::{Engine, InputValues, Parameter, ParameterKind, ResolveError, resolve_all};

fn input(id: &str) -> Parameter {
    Parameter::builder().id(id).build()
}

fn computed(id: &str, expression: &str) -> Parameter {
    Parameter::builder()
        .id(id)
        .kind(ParameterKind::Computed)
        .expression(expression.to_string())
        .build()
}

fn inputs(pairs: &[(&str, &str)]) -> InputValues {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// =============================================================================
// Input parameters
// =============================================================================

#[test]
fn input_values_are_parsed() {
    let params = vec![input("ph"), input("ec")];
    let values = resolve_all(&params, &inputs(&[("ph", "6.5"), ("ec", " 1.2 ")]));
    assert_eq!(values.get("ph"), Some(6.5));
    assert_eq!(values.get("ec"), Some(1.2));
    assert_eq!(values.len(), 2);
}

#[test]
fn missing_empty_or_unparsable_inputs_are_nan() {
    let params = vec![input("a"), input("b"), input("c")];
    let values = resolve_all(&params, &inputs(&[("b", ""), ("c", "abc")]));
    assert!(values.value("a").is_nan());
    assert!(values.value("b").is_nan());
    assert!(values.value("c").is_nan());
}

#[test]
fn only_infinity_is_spelled_out() {
    for raw in ["inf", "-inf", "infinity", "NaN", "nan"] {
        assert!(parse_input(Some(raw)).is_nan(), "{raw}");
    }
    assert_eq!(parse_input(Some("Infinity")), f64::INFINITY);
    assert_eq!(parse_input(Some(" -Infinity ")), f64::NEG_INFINITY);
    assert_eq!(parse_input(Some("1e400")), f64::INFINITY);
    assert_eq!(parse_input(Some("2.5e1")), 25.0);
}

#[test]
fn unknown_id_lookup() {
    let values = resolve_all(&[input("a")], &inputs(&[("a", "1")]));
    assert_eq!(values.get("zzz"), None);
    assert!(values.value("zzz").is_nan());
    assert!(!values.contains("zzz"));
}

// =============================================================================
// Computed parameters
// =============================================================================

#[test]
fn computed_from_inputs() {
    let params = vec![
        input("sand"),
        input("clay"),
        computed("ratio", "sand / clay"),
    ];
    let values = resolve_all(&params, &inputs(&[("sand", "40"), ("clay", "20")]));
    assert_eq!(values.get("ratio"), Some(2.0));
}

#[test]
fn computed_chain_declared_before_dependencies() {
    let params = vec![
        computed("c", "b * 2"),
        computed("b", "a + 1"),
        input("a"),
    ];
    let values = resolve_all(&params, &inputs(&[("a", "4")]));
    assert_eq!(values.get("b"), Some(5.0));
    assert_eq!(values.get("c"), Some(10.0));
}

#[test]
fn shared_dependency_diamond() {
    let params = vec![
        input("base"),
        computed("left", "base + 1"),
        computed("right", "base * 2"),
        computed("top", "left + right"),
    ];
    let values = resolve_all(&params, &inputs(&[("base", "3")]));
    assert_eq!(values.get("top"), Some(10.0));
}

#[test]
fn identifier_that_is_not_a_parameter_is_nan() {
    let params = vec![input("a"), computed("b", "a + ghost")];
    let values = resolve_all(&params, &inputs(&[("a", "1")]));
    assert!(values.value("b").is_nan());
}

#[test]
fn computed_without_expression_uses_input() {
    let params = vec![
        Parameter::builder()
            .id("manual")
            .kind(ParameterKind::Computed)
            .expression("  ".to_string())
            .build(),
        Parameter::builder()
            .id("bare")
            .kind(ParameterKind::Computed)
            .build(),
    ];
    let values = resolve_all(&params, &inputs(&[("manual", "7"), ("bare", "8")]));
    assert_eq!(values.get("manual"), Some(7.0));
    assert_eq!(values.get("bare"), Some(8.0));
}

#[test]
fn input_kind_ignores_expression() {
    let params = vec![
        Parameter::builder()
            .id("a")
            .expression("1 + 1".to_string())
            .build(),
    ];
    let values = resolve_all(&params, &inputs(&[("a", "5")]));
    assert_eq!(values.get("a"), Some(5.0));
}

#[test]
fn duplicate_ids_last_definition_wins() {
    let params = vec![computed("x", "1 + 1"), computed("x", "10 * 10")];
    let values = resolve_all(&params, &InputValues::new());
    assert_eq!(values.get("x"), Some(100.0));
    assert_eq!(values.len(), 1);
}

// =============================================================================
// Cycles and fault isolation
// =============================================================================

#[test]
fn self_reference_is_nan() {
    let params = vec![computed("soc", "soc + 1")];
    let values = resolve_all(&params, &InputValues::new());
    assert!(values.value("soc").is_nan());
}

#[test]
fn mutual_cycle_is_nan_and_isolated() {
    let params = vec![
        computed("a", "b + 1"),
        computed("b", "a * 2"),
        input("x"),
        computed("c", "x + 1"),
        computed("d", "a + 1"),
    ];
    let values = resolve_all(&params, &inputs(&[("x", "2")]));
    assert!(values.value("a").is_nan());
    assert!(values.value("b").is_nan());
    assert!(values.value("d").is_nan());
    assert_eq!(values.get("c"), Some(3.0));
}

#[test]
fn long_cycle_terminates() {
    let params = vec![
        computed("p1", "p2"),
        computed("p2", "p3"),
        computed("p3", "p4"),
        computed("p4", "p1"),
    ];
    let values = resolve_all(&params, &InputValues::new());
    assert_eq!(values.len(), 4);
    assert!(values.value("p1").is_nan());
    assert!(values.value("p4").is_nan());
}

#[test]
fn broken_expression_only_affects_its_parameter() {
    let params = vec![
        input("a"),
        computed("broken", "(a + 1"),
        computed("bad_char", "a # 2"),
        computed("fine", "a * 3"),
    ];
    let values = resolve_all(&params, &inputs(&[("a", "2")]));
    assert!(values.value("broken").is_nan());
    assert!(values.value("bad_char").is_nan());
    assert_eq!(values.get("fine"), Some(6.0));
}

// =============================================================================
// Engine configuration and context
// =============================================================================

#[test]
fn long_chains_resolve_without_a_depth_limit() {
    let mut params = vec![input("p0")];
    params.extend((1..=2000).map(|i| computed(&format!("p{i}"), &format!("p{} + 1", i - 1))));
    // Root-first declaration makes the first resolution walk the whole chain.
    params.reverse();

    let values = resolve_all(&params, &inputs(&[("p0", "1")]));
    assert_eq!(values.len(), 2001);
    assert_eq!(values.get("p2000"), Some(2001.0));
    assert_eq!(values.get("p300"), Some(301.0));
    assert_eq!(values.get("p0"), Some(1.0));
}

#[test]
fn max_depth_is_opt_in() {
    let params = vec![
        computed("p3", "p2 + 1"),
        computed("p2", "p1 + 1"),
        computed("p1", "p0 + 1"),
        input("p0"),
    ];
    let values_in = inputs(&[("p0", "1")]);

    let unlimited = Engine::default().resolve_all(&params, &values_in);
    assert_eq!(unlimited.get("p3"), Some(4.0));

    let shallow = Engine::builder().max_depth(2).build();
    let values = shallow.resolve_all(&params, &values_in);
    assert!(values.value("p3").is_nan());
    assert!(values.value("p2").is_nan());
    assert_eq!(values.get("p1"), Some(2.0));
    assert_eq!(values.get("p0"), Some(1.0));
}

#[test]
fn engine_defaults() {
    assert_eq!(Engine::default().max_depth(), None);
    assert_eq!(Engine::builder().max_depth(8).build().max_depth(), Some(8));
}

#[test]
fn context_detects_cycle_chain() {
    let mut ctx = ResolveContext::new();
    ctx.enter("a").unwrap();
    ctx.enter("b").unwrap();
    assert!(ctx.is_resolving("a"));
    assert_eq!(
        ctx.enter("a"),
        Err(ResolveError::CyclicReference {
            chain: vec!["a".into(), "b".into(), "a".into()],
        })
    );
    ctx.leave();
    ctx.leave();
    assert!(ctx.path().is_empty());
}

#[test]
fn context_enforces_depth() {
    let mut ctx = ResolveContext::with_max_depth(1);
    ctx.enter("a").unwrap();
    assert_eq!(
        ctx.enter("b"),
        Err(ResolveError::MaxDepthExceeded {
            id: "b".into(),
            max_depth: 1,
        })
    );
}

#[test]
fn resolve_parameter_leaves_path_empty() {
    let params = vec![input("a"), computed("b", "a + 1"), computed("c", "c")];
    let index = index_parameters(&params);
    let values = inputs(&[("a", "1")]);
    let mut ctx = ResolveContext::new();

    assert_eq!(resolve_parameter("b", &index, &values, &mut ctx), 2.0);
    assert!(ctx.path().is_empty());
    assert!(resolve_parameter("c", &index, &values, &mut ctx).is_nan());
    assert!(ctx.path().is_empty());
    assert_eq!(ctx.memoized("a"), Some(1.0));
}

#[test]
fn cyclic_reference_message() {
    let err = ResolveError::CyclicReference {
        chain: vec!["a".into(), "b".into(), "a".into()],
    };
    assert_eq!(err.to_string(), "cyclic reference detected: a -> b -> a");
}
