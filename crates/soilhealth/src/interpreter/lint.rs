//! Static diagnostics for parameter sets.
//!
//! Reports expressions that will not resolve the way their author likely
//! intended: syntax errors, references to ids that do not exist, dependency
//! cycles and duplicate ids. Resolution itself never consults these; a set
//! with warnings still resolves, with the affected values as NaN.

use std::collections::HashMap;

use strsim::levenshtein;
use thiserror::Error;

use crate::interpreter::evaluator::Expression;
use crate::parser::ExprError;
use crate::types::Parameter;

/// A problem found in a parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// Two or more parameters share an id; the last one is used.
    #[error("duplicate parameter id '{id}'")]
    DuplicateId { id: String },

    /// A computed parameter's expression does not parse.
    #[error("parameter '{parameter}': {error} in '{expression}'")]
    InvalidExpression {
        parameter: String,
        expression: String,
        error: ExprError,
    },

    /// An expression names an identifier that is not a parameter id.
    #[error("parameter '{parameter}' references unknown '{name}'{}", did_you_mean(suggestions))]
    UnknownReference {
        parameter: String,
        name: String,
        suggestions: Vec<String>,
    },

    /// Computed parameters that depend on each other in a loop.
    #[error("cyclic reference: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Run every lint over a parameter set.
///
/// Per-parameter warnings come first, in declaration order, followed by one
/// warning per dependency cycle.
pub fn lint_parameters(parameters: &[Parameter]) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut known: Vec<&str> = Vec::new();
    for parameter in parameters {
        if known.contains(&parameter.id.as_str()) {
            warnings.push(LintWarning::DuplicateId {
                id: parameter.id.clone(),
            });
        } else {
            known.push(&parameter.id);
        }
    }

    // Last definition wins, matching resolution.
    let mut dependencies: HashMap<&str, Vec<String>> = HashMap::new();
    for parameter in parameters {
        let Some(formula) = parameter.formula() else {
            dependencies.remove(parameter.id.as_str());
            continue;
        };
        match Expression::parse(formula) {
            Ok(expression) => {
                let mut refs = Vec::new();
                for name in expression.identifiers() {
                    if known.contains(&name) {
                        refs.push(name.to_string());
                    } else {
                        warnings.push(LintWarning::UnknownReference {
                            parameter: parameter.id.clone(),
                            name: name.to_string(),
                            suggestions: compute_suggestions(name, &known),
                        });
                    }
                }
                dependencies.insert(&parameter.id, refs);
            }
            Err(error) => {
                warnings.push(LintWarning::InvalidExpression {
                    parameter: parameter.id.clone(),
                    expression: formula.to_string(),
                    error,
                });
                dependencies.remove(parameter.id.as_str());
            }
        }
    }

    warnings.extend(
        detect_cycles(&known, &dependencies)
            .into_iter()
            .map(|chain| LintWarning::CyclicReference { chain }),
    );
    warnings
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - at most 3 suggestions, closest first
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then(|| (dist, (*candidate).to_string()))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

/// DFS coloring for cycle detection.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    /// In the current DFS path.
    Gray,
    /// Fully processed.
    Black,
}

/// Find every dependency cycle, visiting ids in declaration order.
///
/// Each back edge to a node on the current path yields one chain such as
/// `a -> b -> a`.
fn detect_cycles(order: &[&str], dependencies: &HashMap<&str, Vec<String>>) -> Vec<Vec<String>> {
    let mut colors: HashMap<String, Color> = HashMap::new();
    let mut cycles = Vec::new();
    for id in order {
        if !colors.contains_key(*id) {
            let mut path = Vec::new();
            visit(id, dependencies, &mut colors, &mut path, &mut cycles);
        }
    }
    cycles
}

fn visit(
    id: &str,
    dependencies: &HashMap<&str, Vec<String>>,
    colors: &mut HashMap<String, Color>,
    path: &mut Vec<String>,
    cycles: &mut Vec<Vec<String>>,
) {
    colors.insert(id.to_string(), Color::Gray);
    path.push(id.to_string());

    for dependency in dependencies.get(id).into_iter().flatten() {
        match colors.get(dependency) {
            Some(Color::Gray) => {
                let start = path.iter().position(|p| p == dependency).unwrap_or(0);
                let mut chain = path[start..].to_vec();
                chain.push(dependency.clone());
                cycles.push(chain);
            }
            Some(Color::Black) => {}
            None => visit(dependency, dependencies, colors, path, cycles),
        }
    }

    path.pop();
    colors.insert(id.to_string(), Color::Black);
}
