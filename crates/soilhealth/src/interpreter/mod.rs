//! Evaluation engine.
//!
//! This module evaluates compiled expressions, resolves the values of
//! interdependent parameters and exposes the configurable [`Engine`].

mod context;
mod engine;
mod error;
mod evaluator;
mod lint;
mod resolver;

pub use context::ResolveContext;
pub use engine::Engine;
pub use error::ResolveError;
pub use evaluator::{Expression, eval_postfix, evaluate};
pub use lint::{LintWarning, compute_suggestions, lint_parameters};
pub use resolver::{ParameterIndex, index_parameters, resolve_parameter};
