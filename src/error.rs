use thiserror::Error;

use crate::domain::id::CatalogId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A title could not be mapped to exactly one catalog identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no catalog entry found for '{title}'")]
    NotFound { title: String },

    #[error("'{title}' is ambiguous: {} candidates", candidates.len())]
    Ambiguous {
        title: String,
        candidates: Vec<CatalogId>,
    },
}

/// Catalog lookup failed in transport or returned something unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog request timed out")]
    Timeout,

    #[error("unexpected catalog response: {0}")]
    UnexpectedResponse(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::UnexpectedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Notification delivery failed. Never fatal for a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notification channel '{channel}' rejected the message: {reason}")]
    Rejected { channel: &'static str, reason: String },

    #[error("notification channel '{channel}' is unavailable")]
    Unavailable { channel: &'static str },
}

/// Status store could not be read or written. Fatal for a run.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to read status store: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write status store: {0}")]
    Write(#[source] std::io::Error),

    #[error("status store is corrupt: {0}")]
    Parse(String),

    #[error("unsupported status store version {found}")]
    Version { found: u32 },
}

/// Watch list source could not be read or updated.
#[derive(Error, Debug)]
pub enum WatchListError {
    #[error("failed to read watch list: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write watch list: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to parse watch list: {0}")]
    Parse(String),

    #[error("invalid watch list entry: {0}")]
    InvalidEntry(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    WatchList(#[from] WatchListError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_error_reports_candidate_count() {
        let err = ResolutionError::Ambiguous {
            title: "Cosmos".into(),
            candidates: vec![CatalogId::new("1"), CatalogId::new("2")],
        };
        assert_eq!(err.to_string(), "'Cosmos' is ambiguous: 2 candidates");
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let err: Error = QueryError::Timeout.into();
        assert_eq!(err.to_string(), "catalog request timed out");
    }
}
