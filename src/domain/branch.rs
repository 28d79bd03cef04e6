//! Library branches known to the deployment.

use serde::{Deserialize, Serialize};

use super::id::BranchCode;

/// A library branch the catalog can be queried for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub code: BranchCode,
    pub name: String,
}

impl Branch {
    pub fn new(code: impl Into<BranchCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Ordered set of branches plus the default used when an entry names none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDirectory {
    branches: Vec<Branch>,
    default_code: BranchCode,
}

impl BranchDirectory {
    #[must_use]
    pub fn new(branches: Vec<Branch>, default_code: BranchCode) -> Self {
        Self {
            branches,
            default_code,
        }
    }

    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    #[must_use]
    pub fn get(&self, code: &BranchCode) -> Option<&Branch> {
        self.branches.iter().find(|b| &b.code == code)
    }

    /// Name for `code`, if the branch is listed.
    #[must_use]
    pub fn name_of(&self, code: &BranchCode) -> Option<&str> {
        self.get(code).map(|b| b.name.as_str())
    }

    #[must_use]
    pub fn default_code(&self) -> &BranchCode {
        &self.default_code
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
