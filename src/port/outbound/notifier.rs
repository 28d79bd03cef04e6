//! Notifier port for availability notifications.
//!
//! Unlike a fire-and-forget sink, delivery reports success or failure so the
//! run summary can say which events did not reach the chat. A failed delivery
//! never rolls back the status write.

use async_trait::async_trait;
use tracing::info;

use crate::domain::NotificationEvent;
use crate::error::NotifyError;

/// Trait for notification channels.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `send` is awaited by the run, so it should apply its own timeout
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one event.
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError>;

    /// Channel name for logging.
    fn name(&self) -> &'static str;
}

/// Registry of notifiers (composite pattern).
///
/// Every registered notifier is attempted; the first failure is returned.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifierRegistry {
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(e) = notifier.send(event).await {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn name(&self) -> &'static str {
        "registry"
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _event: &NotificationEvent) -> Result<(), NotifyError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        info!(
            title = %event.item.title,
            branch = %event.item.display_branch(),
            catalog_id = %event.catalog_id,
            "Book available"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
