//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration. These factories handle dependency
//! injection and wiring.
//!
//! # Submodules
//!
//! - [`catalog`] - Catalog client, engine and lookup service construction
//! - [`notifier`] - Notification registry construction
//! - [`persistence`] - Status store and watch list construction

pub mod catalog;
pub mod notifier;
pub mod persistence;

use std::sync::Arc;

use crate::application::MonitorRun;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Wire a complete monitoring run from configuration.
#[allow(clippy::result_large_err)]
pub fn build_monitor_run(config: &Config, dry_run: bool) -> Result<MonitorRun> {
    let engine = catalog::build_engine(config)?;
    let watch_list = persistence::build_watch_list(config);
    let store = persistence::build_status_store(config);
    let notifier = notifier::build_notifier_registry(config);

    Ok(MonitorRun::new(engine, watch_list, store, Arc::new(notifier)).dry_run(dry_run))
}
