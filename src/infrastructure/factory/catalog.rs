//! Catalog client factory.

use std::sync::Arc;

use crate::adapter::outbound::library::LibraryApiClient;
use crate::application::{LookupService, MonitorEngine};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::CatalogClient;

/// Build the catalog client. Requires `LIBRARY_API_KEY`.
#[allow(clippy::result_large_err)]
pub fn build_catalog_client(config: &Config) -> Result<Arc<dyn CatalogClient>> {
    let client = LibraryApiClient::new(config.library_settings()?)?;
    Ok(Arc::new(client))
}

/// Build the monitoring engine with the configured pacing.
#[allow(clippy::result_large_err)]
pub fn build_engine(config: &Config) -> Result<MonitorEngine> {
    Ok(MonitorEngine::new(
        build_catalog_client(config)?,
        config.catalog.engine_settings(),
    ))
}

/// Build the lookup service over the configured branch directory.
#[allow(clippy::result_large_err)]
pub fn build_lookup_service(config: &Config) -> Result<LookupService> {
    Ok(LookupService::new(
        build_catalog_client(config)?,
        config.catalog.directory(),
    ))
}
