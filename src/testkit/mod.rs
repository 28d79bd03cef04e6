//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`catalog`] - `ScriptedCatalog`, an in-memory [`CatalogClient`](crate::port::CatalogClient)
//!   with per-title search results and per-branch availability.
//! - [`notifier`] - `RecordingNotifier`, which captures events and can be told to fail.
//! - [`domain`] - Builders for watch items, records and snapshots.
//! - [`config`] - Canonical test configurations.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod notifier;
