//! Operator-facing inbound ports consumed by CLI adapters.
//!
//! Every use case takes the raw configuration TOML rather than a path, so
//! adapters decide where configuration comes from.

pub mod bot;
pub mod configuration;
pub mod diagnostic;
pub mod lookup;
pub mod port;
pub mod runtime;
pub mod watchlist;
