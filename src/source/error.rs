use thiserror::Error;

/// Errors returned by an [`ArticleSource`](super::ArticleSource) fetch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("Article source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Page fetch timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },
}
