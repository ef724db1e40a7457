use std::time::Duration;

use async_trait::async_trait;

use crate::article::{Article, ArticleId};

use super::{ArticleSource, SourceError};

/// Source backed by an ordered in-memory corpus.
///
/// Optionally sleeps before answering to stand in for network latency.
pub struct InMemorySource {
    articles: Vec<Article>,
    latency: Option<Duration>,
}

impl InMemorySource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Page selection without the simulated delay.
    pub fn page(&self, cursor: Option<ArticleId>, limit: usize) -> &[Article] {
        let start = cursor
            .and_then(|id| self.articles.iter().position(|a| a.id() == id))
            .map_or(0, |index| index + 1);
        let end = start.saturating_add(limit).min(self.articles.len());
        &self.articles[start..end]
    }
}

#[async_trait]
impl ArticleSource for InMemorySource {
    async fn fetch_page(
        &self,
        cursor: Option<ArticleId>,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.page(cursor, limit).to_vec())
    }
}
