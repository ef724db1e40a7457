use std::time::Duration;

use async_trait::async_trait;

use crate::article::{Article, ArticleId};

use super::{ArticleSource, SourceError};

/// Wraps a source and fails fetches that take longer than `timeout`.
pub struct TimedSource<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimedSource<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<S: ArticleSource> ArticleSource for TimedSource<S> {
    async fn fetch_page(
        &self,
        cursor: Option<ArticleId>,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        match tokio::time::timeout(self.timeout, self.inner.fetch_page(cursor, limit)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}
