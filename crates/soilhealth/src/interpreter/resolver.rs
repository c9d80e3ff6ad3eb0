//! Dependency-aware resolution of parameter values.
//!
//! Input parameters take their raw value. Computed parameters evaluate their
//! expression after resolving every referenced parameter first. Values are
//! memoized for the pass and references that loop back onto the active path
//! resolve to NaN, so a pass always terminates.
//!
//! Dependencies are followed with an explicit work stack rather than native
//! recursion, so chain length is limited by memory only.

use std::collections::HashMap;
use std::vec::IntoIter;

use tracing::{debug, trace};

use crate::interpreter::ResolveContext;
use crate::interpreter::evaluator::Expression;
use crate::types::{InputValues, Parameter, parse_input};

/// Lookup table from id to definition. Later duplicates replace earlier ones.
pub type ParameterIndex<'a> = HashMap<&'a str, &'a Parameter>;

/// Index a parameter set by id, last definition winning.
pub fn index_parameters(parameters: &[Parameter]) -> ParameterIndex<'_> {
    parameters.iter().map(|p| (p.id.as_str(), p)).collect()
}

/// A computed parameter waiting on its dependencies.
struct Frame {
    id: String,
    expression: Expression,
    pending: IntoIter<String>,
    env: HashMap<String, f64>,
}

/// Outcome of starting to resolve one reference.
enum Step {
    Resolved(f64),
    Descend(Frame),
}

/// Resolve the value of one parameter, resolving its dependencies first.
///
/// Never fails: unknown ids, unparsable input, broken expressions and cycles
/// all resolve to NaN for the affected reference only. A depth limit set on
/// `ctx` cuts deeper references the same way.
pub fn resolve_parameter(
    id: &str,
    index: &ParameterIndex<'_>,
    inputs: &InputValues,
    ctx: &mut ResolveContext,
) -> f64 {
    let mut stack = match begin(id, index, inputs, ctx) {
        Step::Resolved(value) => return value,
        Step::Descend(frame) => vec![frame],
    };

    while let Some(frame) = stack.last_mut() {
        if let Some(name) = frame.pending.next() {
            match begin(&name, index, inputs, ctx) {
                Step::Resolved(value) => {
                    frame.env.insert(name, value);
                }
                Step::Descend(child) => stack.push(child),
            }
            continue;
        }

        let Some(done) = stack.pop() else {
            break;
        };
        let value = done.expression.eval(&done.env);
        ctx.leave();
        ctx.memoize(&done.id, value);
        trace!(parameter = done.id.as_str(), value, "resolved");

        match stack.last_mut() {
            Some(parent) => {
                parent.env.insert(done.id, value);
            }
            None => return value,
        }
    }
    f64::NAN
}

/// Resolve `id` immediately if possible, otherwise enter it and return the
/// frame that collects its dependencies.
fn begin(
    id: &str,
    index: &ParameterIndex<'_>,
    inputs: &InputValues,
    ctx: &mut ResolveContext,
) -> Step {
    if let Some(value) = ctx.memoized(id) {
        return Step::Resolved(value);
    }
    let Some(parameter) = index.get(id) else {
        return Step::Resolved(f64::NAN);
    };

    let Some(formula) = parameter.formula() else {
        let value = parse_input(inputs.get(id).map(String::as_str));
        ctx.memoize(id, value);
        return Step::Resolved(value);
    };

    if let Err(error) = ctx.enter(id) {
        debug!(parameter = id, %error, "dependency not followed");
        return Step::Resolved(f64::NAN);
    }

    match Expression::parse(formula) {
        Ok(expression) => {
            let pending: Vec<String> = expression
                .identifiers()
                .into_iter()
                .filter(|name| index.contains_key(name))
                .map(str::to_string)
                .collect();
            Step::Descend(Frame {
                id: id.to_string(),
                expression,
                pending: pending.into_iter(),
                env: HashMap::new(),
            })
        }
        Err(error) => {
            debug!(parameter = id, %error, expression = formula, "invalid expression");
            ctx.leave();
            ctx.memoize(id, f64::NAN);
            Step::Resolved(f64::NAN)
        }
    }
}
