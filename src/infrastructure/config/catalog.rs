//! Catalog API, pacing and branch directory configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::EngineSettings;
use crate::domain::{Branch, BranchCode, BranchDirectory};

/// Library Information Naru API base URL.
pub const DEFAULT_API_URL: &str = "http://data4library.kr/api";

/// Placeholder replaced by the URL-encoded title in reserve link templates.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Link sent with availability notifications. `{title}` is replaced by the
/// URL-encoded title.
pub const DEFAULT_RESERVE_URL_TEMPLATE: &str =
    "https://library.bucheon.go.kr/library/search/page1.do?title={title}";

/// Branch used when a watch list entry or bot command names none.
pub const DEFAULT_BRANCH: &str = "141652";

/// Bucheon public libraries as known to the catalog API.
const BUCHEON_BRANCHES: &[(&str, &str)] = &[
    ("141321", "상동도서관"),
    ("141535", "원미도서관"),
    ("141043", "심곡도서관"),
    ("141056", "북부도서관"),
    ("141065", "꿈빛도서관"),
    ("141115", "책마루도서관"),
    ("141151", "한울빛도서관"),
    ("141248", "꿈여울도서관"),
    ("141559", "송내도서관"),
    ("141584", "오정도서관"),
    ("141583", "도당도서관"),
    ("141315", "동화도서관"),
    ("141603", "역곡도서관"),
    ("141652", "별빛마루도서관"),
    ("141651", "수주도서관"),
    ("141660", "역곡밝은도서관"),
];

/// One `[[catalog.branches]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BranchEntry {
    pub code: String,
    pub name: String,
}

/// `[catalog]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API base URL.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Search hits requested per query.
    pub page_size: usize,
    /// Pause after each item's query, in milliseconds.
    pub request_delay_ms: u64,
    /// Items checked concurrently.
    pub max_concurrency: usize,
    /// Branch code used when none is given.
    pub default_branch: String,
    /// Reserve/check link template for notifications.
    pub reserve_url_template: String,
    /// Branch directory. Defaults to the Bucheon libraries.
    pub branches: Vec<BranchEntry>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 10,
            page_size: 10,
            request_delay_ms: 500,
            max_concurrency: 1,
            default_branch: DEFAULT_BRANCH.to_string(),
            reserve_url_template: DEFAULT_RESERVE_URL_TEMPLATE.to_string(),
            branches: BUCHEON_BRANCHES
                .iter()
                .map(|(code, name)| BranchEntry {
                    code: (*code).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Engine pacing derived from this section.
    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            request_delay: Duration::from_millis(self.request_delay_ms),
            max_concurrency: self.max_concurrency.max(1),
        }
    }

    /// The configured branches as a directory.
    #[must_use]
    pub fn directory(&self) -> BranchDirectory {
        let branches = self
            .branches
            .iter()
            .map(|entry| Branch::new(entry.code.trim(), entry.name.trim()))
            .collect();
        BranchDirectory::new(branches, BranchCode::new(self.default_branch.trim()))
    }
}
