//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the extension points adapters implement to integrate the
//! monitor with external systems.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │     (MonitorEngine)     │
//!     ┌──────────────┤                         ├──────────────┐
//!     │              └────────────┬────────────┘              │
//!     ▼                           ▼                           ▼
//! ┌─────────┐  ┌───────────┐  ┌─────────────┐         ┌───────────┐
//! │ Catalog │  │ WatchList │  │ StatusStore │         │ Notifier  │
//! │ Adapter │  │  Adapter  │  │   Adapter   │         │  Adapter  │
//! └─────────┘  └───────────┘  └─────────────┘         └───────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use outbound::catalog::{CatalogClient, CatalogMatch};
pub use outbound::notifier::{LogNotifier, Notifier, NotifierRegistry, NullNotifier};
pub use outbound::store::StatusStore;
pub use outbound::watchlist::{WatchListEditor, WatchListSource};
