//! Reasons a dependency could not be followed during resolution.

use thiserror::Error;

/// Why the resolver stopped following a reference.
///
/// These never escape a resolution pass: the reference resolves to NaN and
/// the pass carries on. They exist so the event can be logged and tested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The parameter is already being resolved further up the path.
    #[error("cyclic reference detected: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// The dependency chain is deeper than the configured limit.
    #[error("maximum resolution depth {max_depth} exceeded at '{id}'")]
    MaxDepthExceeded { id: String, max_depth: usize },
}
