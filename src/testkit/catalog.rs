//! Scripted [`CatalogClient`] for tests.
//!
//! Search results are keyed by the exact query string; availability by
//! `(id, branch)`. Unscripted searches return no hits and unscripted
//! availability checks report the title as not held. Scripts can be changed
//! between cycles with [`ScriptedCatalog::set_availability`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Availability, BranchCode, CatalogId};
use crate::error::QueryError;
use crate::port::{CatalogClient, CatalogMatch};

type CheckKey = (CatalogId, BranchCode);

#[derive(Default)]
pub struct ScriptedCatalog {
    searches: Mutex<HashMap<String, Result<Vec<CatalogMatch>, QueryError>>>,
    availability: Mutex<HashMap<CheckKey, Result<Availability, QueryError>>>,
    search_calls: AtomicUsize,
    check_calls: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the hits returned for `query`.
    pub fn with_search(self, query: &str, hits: Vec<CatalogMatch>) -> Self {
        self.searches.lock().insert(query.to_string(), Ok(hits));
        self
    }

    /// Script a single hit for `title` with identifier `id`.
    pub fn with_title(self, title: &str, id: &str) -> Self {
        self.with_search(title, vec![CatalogMatch::new(id, title)])
    }

    /// Script a failing search for `query`.
    pub fn with_search_error(self, query: &str, error: QueryError) -> Self {
        self.searches.lock().insert(query.to_string(), Err(error));
        self
    }

    /// Script the availability of `id` at `branch`.
    pub fn with_availability(self, id: &str, branch: &str, availability: Availability) -> Self {
        self.set_availability(id, branch, Ok(availability));
        self
    }

    /// Script `id` at `branch` as held and available (`true`) or on loan (`false`).
    pub fn with_available(self, id: &str, branch: &str, available: bool) -> Self {
        self.with_availability(id, branch, Availability::new(true, available))
    }

    /// Script a failing availability check.
    pub fn with_check_error(self, id: &str, branch: &str, error: QueryError) -> Self {
        self.set_availability(id, branch, Err(error));
        self
    }

    /// Replace the scripted availability of `id` at `branch`.
    pub fn set_availability(
        &self,
        id: &str,
        branch: &str,
        result: Result<Availability, QueryError>,
    ) {
        self.availability
            .lock()
            .insert((CatalogId::new(id), BranchCode::new(branch)), result);
    }

    /// Shorthand for flipping a held title between available and on loan.
    pub fn set_available(&self, id: &str, branch: &str, available: bool) {
        self.set_availability(id, branch, Ok(Availability::new(true, available)));
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalog {
    async fn search(&self, title: &str) -> Result<Vec<CatalogMatch>, QueryError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.searches
            .lock()
            .get(title)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn check_availability(
        &self,
        id: &CatalogId,
        branch: &BranchCode,
    ) -> Result<Availability, QueryError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.availability
            .lock()
            .get(&(id.clone(), branch.clone()))
            .cloned()
            .unwrap_or(Ok(Availability::new(false, false)))
    }
}
