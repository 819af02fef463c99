//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum RepoHelperError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Invariant violations detected while building domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown mode {0:?}, expected \"question\" or \"flowchart\"")]
    UnknownMode(String),
}
