//! Domain validation errors.
//!
//! These errors are returned when input does not satisfy a domain invariant,
//! such as a malformed persisted key or an incomplete watch list row.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Item key text did not match `catalog:<id>@<branch>` or `title:<title>@<branch>`.
    #[error("invalid item key '{0}'")]
    InvalidKey(String),

    /// Watch items need a non-empty title.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// Watch items need a non-empty branch code.
    #[error("branch code cannot be empty")]
    EmptyBranch,
}
