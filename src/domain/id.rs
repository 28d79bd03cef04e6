//! Domain identifier types with proper encapsulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Catalog identifier (ISBN-13 for the default catalog) - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(String);

impl CatalogId {
    /// Create a new `CatalogId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the catalog ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a 13-digit ISBN, tolerating hyphens and spaces.
    ///
    /// Returns `None` when the input is not exactly thirteen digits.
    #[must_use]
    pub fn parse_isbn13(raw: &str) -> Option<Self> {
        let digits: String = raw
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        if digits.len() == 13 && digits.chars().all(|c| c.is_ascii_digit()) {
            Some(Self(digits))
        } else {
            None
        }
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CatalogId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CatalogId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Library branch code - newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchCode(String);

impl BranchCode {
    /// Create a new `BranchCode` from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the branch code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BranchCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BranchCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Stable identity of a watched item across runs.
///
/// Items that carry a catalog identifier are keyed by it; the rest are keyed
/// by their title. Both forms are scoped to one branch.
///
/// The text form (`catalog:<id>@<branch>` or `title:<title>@<branch>`) is the
/// serialized representation, so keys can be used as JSON object keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKey {
    Catalog { id: CatalogId, branch: BranchCode },
    Title { title: String, branch: BranchCode },
}

impl ItemKey {
    #[must_use]
    pub fn catalog(id: CatalogId, branch: BranchCode) -> Self {
        Self::Catalog { id, branch }
    }

    #[must_use]
    pub fn title(title: impl Into<String>, branch: BranchCode) -> Self {
        Self::Title {
            title: title.into(),
            branch,
        }
    }

    #[must_use]
    pub fn branch(&self) -> &BranchCode {
        match self {
            Self::Catalog { branch, .. } | Self::Title { branch, .. } => branch,
        }
    }

    #[must_use]
    pub const fn is_catalog(&self) -> bool {
        matches!(self, Self::Catalog { .. })
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog { id, branch } => write!(f, "catalog:{id}@{branch}"),
            Self::Title { title, branch } => write!(f, "title:{title}@{branch}"),
        }
    }
}

impl FromStr for ItemKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidKey(s.to_string());
        let (kind, rest) = s.split_once(':').ok_or_else(invalid)?;
        // Titles may contain '@'; branch codes never do.
        let (value, branch) = rest.rsplit_once('@').ok_or_else(invalid)?;
        if value.is_empty() || branch.is_empty() {
            return Err(invalid());
        }
        let branch = BranchCode::new(branch);
        match kind {
            "catalog" => Ok(Self::catalog(CatalogId::new(value), branch)),
            "title" => Ok(Self::title(value, branch)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for ItemKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn_parsing_strips_hyphens() {
        let id = CatalogId::parse_isbn13("978-89-310-3956-0").unwrap();
        assert_eq!(id.as_str(), "9788931039560");
    }

    #[test]
    fn isbn_parsing_rejects_wrong_length_and_letters() {
        assert!(CatalogId::parse_isbn13("12345").is_none());
        assert!(CatalogId::parse_isbn13("978893103956X").is_none());
        assert!(CatalogId::parse_isbn13("Cosmos").is_none());
    }

    #[test]
    fn key_text_form_parses_back() {
        let key = ItemKey::title("Cosmos", BranchCode::new("141001"));
        assert_eq!(key.to_string(), "title:Cosmos@141001");
        assert_eq!("title:Cosmos@141001".parse::<ItemKey>().unwrap(), key);

        let key = ItemKey::catalog(CatalogId::new("9788983711892"), BranchCode::new("141652"));
        assert_eq!(key.to_string().parse::<ItemKey>().unwrap(), key);
    }

    #[test]
    fn key_parsing_splits_on_last_at_sign() {
        let key: ItemKey = "title:me@home@141001".parse().unwrap();
        assert_eq!(key, ItemKey::title("me@home", BranchCode::new("141001")));
    }

    #[test]
    fn key_parsing_rejects_malformed_input() {
        assert!("Cosmos@141001".parse::<ItemKey>().is_err());
        assert!("title:Cosmos".parse::<ItemKey>().is_err());
        assert!("shelf:Cosmos@141001".parse::<ItemKey>().is_err());
        assert!("title:@141001".parse::<ItemKey>().is_err());
    }

    #[test]
    fn key_serializes_as_json_object_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(ItemKey::title("Cosmos", BranchCode::new("141001")), 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"title:Cosmos@141001":1}"#);

        let parsed: std::collections::BTreeMap<ItemKey, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}
