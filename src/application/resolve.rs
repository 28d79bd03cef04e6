//! Title to catalog identifier resolution.
//!
//! A title search can return several books. Tracking the wrong one silently
//! is worse than skipping a cycle, so anything short of a single clear
//! candidate is a [`ResolutionError`].

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{CatalogId, WatchItem};
use crate::error::{QueryError, ResolutionError};
use crate::port::{CatalogClient, CatalogMatch};

/// Where a resolved identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The watch list entry already carried it.
    WatchList,
    /// Found by a catalog search during this cycle.
    Search,
}

/// Lower-case, collapse whitespace runs, trim.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Pick the single catalog identifier `candidates` point to for `title`.
///
/// Duplicate ids collapse to one. With several distinct ids, the exact
/// (case-insensitive) title matches decide; anything but one is ambiguous.
pub fn select_candidate(
    title: &str,
    candidates: &[CatalogMatch],
) -> Result<CatalogId, ResolutionError> {
    let mut distinct: Vec<&CatalogMatch> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !distinct.iter().any(|seen| seen.id == candidate.id) {
            distinct.push(candidate);
        }
    }

    match distinct.as_slice() {
        [] => Err(ResolutionError::NotFound {
            title: title.to_string(),
        }),
        [only] => Ok(only.id.clone()),
        many => {
            let wanted = normalize_title(title);
            let exact: Vec<&&CatalogMatch> = many
                .iter()
                .filter(|c| normalize_title(&c.title) == wanted)
                .collect();
            match exact.as_slice() {
                [single] => Ok(single.id.clone()),
                _ => Err(ResolutionError::Ambiguous {
                    title: title.to_string(),
                    candidates: many.iter().map(|c| c.id.clone()).collect(),
                }),
            }
        }
    }
}

/// Failure while resolving one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    Resolution(ResolutionError),
    Query(QueryError),
}

/// Per-cycle resolver with a title cache.
///
/// Items sharing a title at different branches trigger one search. Search
/// transport errors are not cached so a later item may retry.
pub struct Resolver<'a> {
    catalog: &'a dyn CatalogClient,
    cache: Mutex<HashMap<String, Result<CatalogId, ResolutionError>>>,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(catalog: &'a dyn CatalogClient) -> Self {
        Self {
            catalog,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the identifier to check `item` with.
    ///
    /// Only the watch list entry or a fresh search count. A previously
    /// stored id is never reused, so an ambiguous title fails every cycle.
    pub async fn resolve(
        &self,
        item: &WatchItem,
    ) -> Result<(CatalogId, ResolutionSource), ResolveFailure> {
        if let Some(id) = &item.catalog_id {
            return Ok((id.clone(), ResolutionSource::WatchList));
        }

        let cache_key = normalize_title(&item.title);
        let cached = self.cache.lock().get(&cache_key).cloned();
        if let Some(cached) = cached {
            debug!(title = %item.title, "Resolution cache hit");
            return cached
                .map(|id| (id, ResolutionSource::Search))
                .map_err(ResolveFailure::Resolution);
        }

        let candidates = self
            .catalog
            .search(&item.title)
            .await
            .map_err(ResolveFailure::Query)?;
        let selected = select_candidate(&item.title, &candidates);
        debug!(
            title = %item.title,
            candidates = candidates.len(),
            resolved = selected.is_ok(),
            "Resolved title"
        );
        self.cache.lock().insert(cache_key, selected.clone());

        selected
            .map(|id| (id, ResolutionSource::Search))
            .map_err(ResolveFailure::Resolution)
    }
}
