//! Library Information Naru REST API client.
//!
//! Implements [`CatalogClient`] over `srchBooks` (title search) and
//! `bookExist` (per-branch availability).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{ExistResponse, SearchResponse};
use crate::domain::{Availability, BranchCode, CatalogId};
use crate::error::{QueryError, Result};
use crate::port::{CatalogClient, CatalogMatch};

/// Connection settings for the catalog API.
#[derive(Debug, Clone)]
pub struct LibraryApiSettings {
    /// Base URL, e.g. `http://data4library.kr/api`.
    pub api_url: String,
    /// `authKey` query parameter.
    pub api_key: String,
    pub timeout: Duration,
    /// Search hits requested per query.
    pub page_size: usize,
}

/// HTTP client for the library catalog API.
pub struct LibraryApiClient {
    client: Client,
    settings: LibraryApiSettings,
}

impl LibraryApiClient {
    /// Build a client with the configured request timeout.
    pub fn new(settings: LibraryApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(QueryError::from)?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.settings.api_url.trim_end_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> std::result::Result<T, QueryError> {
        let url = self.endpoint(path);
        debug!(url = %url, "Catalog request");

        let response = self
            .client
            .get(&url)
            .query(&[("authKey", self.settings.api_key.as_str()), ("format", "json")])
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    async fn search_once(&self, title: &str) -> std::result::Result<Vec<CatalogMatch>, QueryError> {
        let page_size = self.settings.page_size.to_string();
        let response: SearchResponse = self
            .get_json("srchBooks", &[("title", title), ("pageSize", page_size.as_str())])
            .await?;
        response.into_matches()
    }
}

#[async_trait]
impl CatalogClient for LibraryApiClient {
    async fn search(&self, title: &str) -> std::result::Result<Vec<CatalogMatch>, QueryError> {
        let matches = self.search_once(title).await?;
        if !matches.is_empty() {
            return Ok(matches);
        }

        // The catalog indexes some titles without spaces.
        let compact: String = title.split_whitespace().collect();
        if compact == title {
            return Ok(matches);
        }
        debug!(title = %title, compact = %compact, "Retrying search without spaces");
        self.search_once(&compact).await
    }

    async fn check_availability(
        &self,
        id: &CatalogId,
        branch: &BranchCode,
    ) -> std::result::Result<Availability, QueryError> {
        let response: ExistResponse = self
            .get_json(
                "bookExist",
                &[("libCode", branch.as_str()), ("isbn13", id.as_str())],
            )
            .await?;
        response.into_availability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_url: &str) -> LibraryApiSettings {
        LibraryApiSettings {
            api_url: api_url.into(),
            api_key: "key".into(),
            timeout: Duration::from_secs(10),
            page_size: 5,
        }
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = LibraryApiClient::new(settings("http://data4library.kr/api/")).unwrap();
        assert_eq!(client.endpoint("bookExist"), "http://data4library.kr/api/bookExist");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_query_error() {
        let client = LibraryApiClient::new(LibraryApiSettings {
            timeout: Duration::from_millis(500),
            ..settings("http://127.0.0.1:9")
        })
        .unwrap();
        let result = client
            .check_availability(&CatalogId::new("9788983711892"), &BranchCode::new("141001"))
            .await;
        assert!(matches!(
            result,
            Err(QueryError::Transport(_) | QueryError::Timeout)
        ));
    }
}
