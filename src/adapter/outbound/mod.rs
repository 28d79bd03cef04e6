//! Outbound adapters (driven side).

pub mod library;
pub mod notifier;
pub mod store;
pub mod watchlist;
