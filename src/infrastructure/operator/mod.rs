//! Operator implementations for inbound adapters.

pub mod bot;
pub mod configuration;
pub mod diagnostic;
pub mod entry;
pub mod lookup;
pub mod runtime;
pub mod watchlist;

mod shared;
