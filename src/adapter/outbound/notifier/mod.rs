//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for notification backends beyond
//! the log and null notifiers defined alongside the port.

#[cfg(feature = "telegram")]
pub mod telegram;
