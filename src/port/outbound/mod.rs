//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators of the monitor: the library
//! catalog, the watch list, the status store and notification channels.

pub mod catalog;
pub mod notifier;
pub mod store;
pub mod watchlist;
