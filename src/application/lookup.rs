//! Ad-hoc catalog lookups for interactive commands.
//!
//! Used by the chat bot and the CLI to answer "where can I borrow this?"
//! without touching the status store.

use std::sync::Arc;

use crate::domain::{Availability, Branch, BranchDirectory, CatalogId, WatchItem};
use crate::error::QueryError;
use crate::port::{CatalogClient, CatalogMatch};

use super::resolve::{ResolveFailure, Resolver};

/// Availability of one title at one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchAvailability {
    pub branch: Branch,
    pub result: Result<Availability, QueryError>,
}

/// Coarse state shown for one watched item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemState {
    Available,
    OnLoan,
    NotHeld,
    Unknown(String),
}

impl ItemState {
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Available => "✅",
            Self::OnLoan => "❌",
            Self::NotHeld => "📭",
            Self::Unknown(_) => "❓",
        }
    }
}

impl From<Availability> for ItemState {
    fn from(availability: Availability) -> Self {
        match (availability.held, availability.loan_available) {
            (false, _) => Self::NotHeld,
            (true, true) => Self::Available,
            (true, false) => Self::OnLoan,
        }
    }
}

/// Live lookups across the branch directory.
#[derive(Clone)]
pub struct LookupService {
    catalog: Arc<dyn CatalogClient>,
    directory: BranchDirectory,
}

impl LookupService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogClient>, directory: BranchDirectory) -> Self {
        Self { catalog, directory }
    }

    #[must_use]
    pub fn directory(&self) -> &BranchDirectory {
        &self.directory
    }

    /// Title search, first `limit` hits.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<CatalogMatch>, QueryError> {
        let mut hits = self.catalog.search(query).await?;
        hits.truncate(limit);
        Ok(hits)
    }

    /// Check `id` at every branch in the directory, in directory order.
    pub async fn check_everywhere(&self, id: &CatalogId) -> Vec<BranchAvailability> {
        let mut results = Vec::with_capacity(self.directory.len());
        for branch in self.directory.branches() {
            let result = self.catalog.check_availability(id, &branch.code).await;
            results.push(BranchAvailability {
                branch: branch.clone(),
                result,
            });
        }
        results
    }

    /// Current state of each watched item, resolving titles as the monitor does.
    pub async fn item_states(&self, items: &[WatchItem]) -> Vec<(WatchItem, ItemState)> {
        let resolver = Resolver::new(self.catalog.as_ref());
        let mut states = Vec::with_capacity(items.len());
        for item in items {
            let state = match resolver.resolve(item).await {
                Ok((id, _)) => match self.catalog.check_availability(&id, &item.branch_code).await {
                    Ok(availability) => ItemState::from(availability),
                    Err(e) => ItemState::Unknown(e.to_string()),
                },
                Err(ResolveFailure::Resolution(e)) => ItemState::Unknown(e.to_string()),
                Err(ResolveFailure::Query(e)) => ItemState::Unknown(e.to_string()),
            };
            states.push((item.clone(), state));
        }
        states
    }
}
