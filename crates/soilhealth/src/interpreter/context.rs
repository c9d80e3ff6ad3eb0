//! Per-pass state for dependency resolution.

use std::collections::HashMap;

use crate::interpreter::ResolveError;
use crate::types::ComputedValues;

/// State owned by a single resolution pass.
///
/// The context tracks:
/// - Values already resolved in this pass (memo table)
/// - The path of parameters currently being resolved, for cycle detection
/// - An optional limit on the length of that path
///
/// Nothing here outlives the pass, so independent passes share no state.
#[derive(Debug, Default)]
pub struct ResolveContext {
    memo: HashMap<String, f64>,
    path: Vec<String>,
    max_depth: Option<usize>,
}

impl ResolveContext {
    /// A context with no depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that refuses to nest more than `max_depth` computed
    /// parameters.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// A value resolved earlier in this pass.
    pub fn memoized(&self, id: &str) -> Option<f64> {
        self.memo.get(id).copied()
    }

    pub fn memoize(&mut self, id: &str, value: f64) {
        self.memo.insert(id.to_string(), value);
    }

    /// Check if a parameter is on the active resolution path.
    pub fn is_resolving(&self, id: &str) -> bool {
        self.path.iter().any(|p| p == id)
    }

    /// Push a parameter onto the active path.
    ///
    /// Returns error if:
    /// - The parameter is already on the path (cycle)
    /// - A depth limit is set and the path is already that long
    pub fn enter(&mut self, id: &str) -> Result<(), ResolveError> {
        if self.is_resolving(id) {
            let mut chain = self.path.clone();
            chain.push(id.to_string());
            return Err(ResolveError::CyclicReference { chain });
        }
        if let Some(max_depth) = self.max_depth {
            if self.path.len() >= max_depth {
                return Err(ResolveError::MaxDepthExceeded {
                    id: id.to_string(),
                    max_depth,
                });
            }
        }
        self.path.push(id.to_string());
        Ok(())
    }

    /// Pop the innermost parameter from the active path.
    pub fn leave(&mut self) {
        self.path.pop();
    }

    /// The active resolution path, outermost first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn into_values(self) -> ComputedValues {
        ComputedValues::from(self.memo)
    }
}
