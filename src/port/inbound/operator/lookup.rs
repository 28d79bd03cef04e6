//! Catalog lookup projections for operator-facing adapters.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Availability of a title at one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum BranchState {
    Available,
    OnLoan,
    NotHeld,
    Unknown(String),
}

impl BranchState {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// One row of a branch availability listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchStatus {
    pub name: String,
    pub code: String,
    pub state: BranchState,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub isbn: String,
    pub title: String,
    pub authors: String,
}

/// Output of `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SearchReport {
    NoResults,
    /// Several hits; none was checked.
    Candidates { candidates: Vec<Candidate> },
    /// One title checked at every branch.
    Branches {
        isbn: String,
        title: Option<String>,
        branches: Vec<BranchStatus>,
    },
}

/// Live catalog lookups.
#[async_trait]
pub trait LookupOperator: Send + Sync {
    /// Search by title or ISBN-13; a unique hit is checked at every branch.
    async fn search(&self, config_toml: &str, query: &str) -> Result<SearchReport>;
}
