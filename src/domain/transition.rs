//! Availability transitions and the notification decision.
//!
//! Pure functions of (previous record, current record): no I/O, no clock.

use super::event::NotificationEvent;
use super::item::WatchItem;
use super::record::AvailabilityRecord;

/// Change in availability between two consecutive checks of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Unavailable or never seen before, now available.
    BecameAvailable,
    StillAvailable,
    BecameUnavailable,
    /// Unavailable or never seen before, still unavailable.
    StillUnavailable,
}

impl Transition {
    /// Only a move into availability is worth telling anyone about.
    #[must_use]
    pub const fn should_notify(self) -> bool {
        matches!(self, Self::BecameAvailable)
    }
}

/// Classify the move from `previous` to `current`. An absent record counts as unavailable.
#[must_use]
pub fn decide(previous: Option<&AvailabilityRecord>, current: &AvailabilityRecord) -> Transition {
    let was_available = previous.is_some_and(|record| record.available);
    match (was_available, current.available) {
        (false, true) => Transition::BecameAvailable,
        (true, true) => Transition::StillAvailable,
        (true, false) => Transition::BecameUnavailable,
        (false, false) => Transition::StillUnavailable,
    }
}

/// Build the event for `item` if the transition warrants one.
#[must_use]
pub fn notification_for(
    item: &WatchItem,
    previous: Option<&AvailabilityRecord>,
    current: &AvailabilityRecord,
) -> Option<NotificationEvent> {
    decide(previous, current)
        .should_notify()
        .then(|| NotificationEvent::new(item.clone(), current))
}
