//! Library-agnostic domain types: watched items, availability records,
//! transitions and notification events.
//!
//! Nothing in this module performs I/O; the notification decision in
//! [`transition`] is a pure function of two records.

pub mod branch;
pub mod error;
pub mod event;
pub mod failure;
pub mod id;
pub mod item;
pub mod record;
pub mod transition;

pub use branch::{Branch, BranchDirectory};
pub use error::DomainError;
pub use event::NotificationEvent;
pub use failure::{FailureKind, ItemFailure};
pub use id::{BranchCode, CatalogId, ItemKey};
pub use item::WatchItem;
pub use record::{Availability, AvailabilityRecord, StatusSnapshot, StoredRecord};
pub use transition::{decide, notification_for, Transition};
