//! Per-item failures isolated by the monitoring cycle.

use std::fmt;

use serde::Serialize;

use super::item::WatchItem;
use crate::error::{QueryError, ResolutionError};

/// Why an item was skipped in a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Resolution(ResolutionError),
    Query(QueryError),
}

impl FailureKind {
    /// Short machine-friendly label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Resolution(_) => "resolution",
            Self::Query(_) => "query",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution(e) => write!(f, "{e}"),
            Self::Query(e) => write!(f, "{e}"),
        }
    }
}

impl From<ResolutionError> for FailureKind {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<QueryError> for FailureKind {
    fn from(err: QueryError) -> Self {
        Self::Query(err)
    }
}

impl Serialize for FailureKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("FailureKind", 2)?;
        state.serialize_field("kind", self.label())?;
        state.serialize_field("reason", &self.to_string())?;
        state.end()
    }
}

/// An item whose previous record was carried forward unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    pub item: WatchItem,
    pub kind: FailureKind,
}

impl ItemFailure {
    #[must_use]
    pub fn new(item: WatchItem, kind: impl Into<FailureKind>) -> Self {
        Self {
            item,
            kind: kind.into(),
        }
    }
}
