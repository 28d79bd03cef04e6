//! Watched items: a title tracked at one library branch.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{BranchCode, CatalogId, ItemKey};

/// A (title, branch) pair the monitor tracks.
///
/// Re-derived from the watch list on every run; its only cross-run identity
/// is [`WatchItem::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchItem {
    pub title: String,
    pub branch_code: BranchCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<CatalogId>,
}

impl WatchItem {
    /// Create a validated watch item. Title and branch are trimmed.
    pub fn try_new(
        title: impl Into<String>,
        branch_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into().trim().to_string();
        let branch = branch_code.into().trim().to_string();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if branch.is_empty() {
            return Err(DomainError::EmptyBranch);
        }
        Ok(Self {
            title,
            branch_code: BranchCode::new(branch),
            branch_name: None,
            catalog_id: None,
        })
    }

    #[must_use]
    pub fn with_branch_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.branch_name = (!name.trim().is_empty()).then_some(name);
        self
    }

    #[must_use]
    pub fn with_catalog_id(mut self, id: CatalogId) -> Self {
        self.catalog_id = Some(id);
        self
    }

    /// Identity key: catalog-based when an identifier is known, title-based otherwise.
    #[must_use]
    pub fn key(&self) -> ItemKey {
        match &self.catalog_id {
            Some(id) => ItemKey::catalog(id.clone(), self.branch_code.clone()),
            None => self.title_key(),
        }
    }

    /// The title-based key, regardless of whether a catalog id is present.
    #[must_use]
    pub fn title_key(&self) -> ItemKey {
        ItemKey::title(self.title.clone(), self.branch_code.clone())
    }

    /// Branch name for display, falling back to the code.
    #[must_use]
    pub fn display_branch(&self) -> &str {
        self.branch_name
            .as_deref()
            .unwrap_or_else(|| self.branch_code.as_str())
    }
}
