//! Catalog port: title search and per-branch availability.

use async_trait::async_trait;

use crate::domain::{Availability, BranchCode, CatalogId};
use crate::error::QueryError;

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMatch {
    pub id: CatalogId,
    pub title: String,
    pub authors: String,
}

impl CatalogMatch {
    pub fn new(id: impl Into<CatalogId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: String::new(),
        }
    }

    #[must_use]
    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }
}

/// Client for an external library catalog.
///
/// # Implementation Notes
///
/// - `search` returns an empty list, not an error, when nothing matches
/// - Transport, timeout and parse failures surface as [`QueryError`]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search the catalog by title.
    async fn search(&self, title: &str) -> Result<Vec<CatalogMatch>, QueryError>;

    /// Current availability of `id` at `branch`.
    async fn check_availability(
        &self,
        id: &CatalogId,
        branch: &BranchCode,
    ) -> Result<Availability, QueryError>;
}
