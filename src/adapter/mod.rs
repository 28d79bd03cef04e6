//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line interface and health endpoint
//! - [`outbound`] - Driven side: catalog, status store, watch list, notifiers

pub mod inbound;
pub mod outbound;
