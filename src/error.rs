//! Error types for curriculum search

use thiserror::Error;

/// Result type for curriculum search operations
pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("unknown search category '{0}' (expected Vocabulary, Skill or Genre)")]
    InvalidCategory(String),

    #[error("query cannot be matched: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed curriculum file: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed synonym file: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuery | Self::Pattern(_) => "BAD_REQUEST",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) | Self::Csv(_) | Self::Json(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller, not the server, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyQuery | Self::InvalidCategory(_) | Self::Pattern(_)
        )
    }
}
