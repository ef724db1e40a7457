//! Shared test utilities: instrumented article sources and state helpers.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pagefeed::article::{Article, ArticleId};
use pagefeed::paging::PagingState;
use pagefeed::source::{ArticleSource, InMemorySource, SourceError};
use tokio::sync::watch;

pub const LATENCY: Duration = Duration::from_millis(100);

/// Records every fetch before delegating to an in-memory corpus.
pub struct CountingSource {
    inner: InMemorySource,
    calls: AtomicUsize,
    requests: Mutex<Vec<(Option<ArticleId>, usize)>>,
    failures_left: AtomicUsize,
}

impl CountingSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            inner: InMemorySource::new(articles).with_latency(LATENCY),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            failures_left: AtomicUsize::new(0),
        }
    }

    /// The next `count` fetches fail with `SourceError::Unavailable`.
    pub fn failing_first(self, count: usize) -> Self {
        self.failures_left.store(count, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(Option<ArticleId>, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSource for CountingSource {
    async fn fetch_page(
        &self,
        cursor: Option<ArticleId>,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push((cursor, limit));
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            tokio::time::sleep(LATENCY).await;
            return Err(SourceError::Unavailable {
                reason: "scripted failure".to_string(),
            });
        }
        self.inner.fetch_page(cursor, limit).await
    }
}

/// Snapshot with `articles` loaded and no fetch pending.
pub fn idle(articles: &[Article], can_load_more: bool) -> PagingState {
    PagingState {
        articles: articles.to_vec(),
        page_size: 20,
        is_loading: false,
        can_load_more,
    }
}

/// Snapshot with `articles` shown and the next page requested.
pub fn loading(articles: &[Article]) -> PagingState {
    PagingState {
        articles: articles.to_vec(),
        page_size: 20,
        is_loading: true,
        can_load_more: true,
    }
}

/// Wait until a published snapshot satisfies `predicate`.
pub async fn wait_for(
    states: &mut watch::Receiver<PagingState>,
    predicate: impl FnMut(&PagingState) -> bool,
) -> PagingState {
    states
        .wait_for(predicate)
        .await
        .expect("paging session ended")
        .clone()
}

/// Let every pending fetch complete.
pub async fn settle() {
    tokio::time::sleep(LATENCY * 20).await;
}
