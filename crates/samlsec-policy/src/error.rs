//! Error types for chain resolution.

/// Errors raised by the criteria-driven resolver entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A required criterion was absent or a criterion was built from nothing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
