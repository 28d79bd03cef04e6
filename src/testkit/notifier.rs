//! Recording [`Notifier`] for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::NotificationEvent;
use crate::error::NotifyError;
use crate::port::Notifier;

/// Captures delivered events. While failing, every send is rejected and
/// nothing is recorded.
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<NotificationEvent>>,
    attempts: AtomicUsize,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose channel is down.
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.set_failing(true);
        notifier
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Events delivered so far, in send order.
    pub fn events(&self) -> Vec<NotificationEvent> {
        self.delivered.lock().clone()
    }

    /// Titles of delivered events, in send order.
    pub fn titles(&self) -> Vec<String> {
        self.delivered
            .lock()
            .iter()
            .map(|event| event.item.title.clone())
            .collect()
    }

    /// Send attempts, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Unavailable { channel: "recording" });
        }
        self.delivered.lock().push(event.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
