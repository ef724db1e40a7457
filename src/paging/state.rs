use crate::article::{Article, ArticleId};
use crate::mvi::ViewState;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Snapshot of the paged list.
///
/// Replaced, never mutated in place, on every intent.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingState {
    /// Articles in arrival order. Cleared on refresh.
    pub articles: Vec<Article>,
    pub page_size: usize,
    /// True while a page fetch should be in flight.
    pub is_loading: bool,
    /// False once a fetch returned fewer than `page_size` articles.
    pub can_load_more: bool,
}

/// Coarse view of a snapshot, matching the loading cycle diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingPhase {
    Loading,
    Idle,
    Exhausted,
}

impl PagingState {
    /// Initial snapshot: empty list with the first page already requested.
    pub fn new(page_size: usize) -> Self {
        Self {
            articles: Vec::new(),
            page_size,
            is_loading: true,
            can_load_more: true,
        }
    }

    pub fn last_article_id(&self) -> Option<ArticleId> {
        self.articles.last().map(Article::id)
    }

    pub fn is_exhausted(&self) -> bool {
        !self.can_load_more
    }

    pub fn phase(&self) -> PagingPhase {
        if self.is_loading {
            PagingPhase::Loading
        } else if self.can_load_more {
            PagingPhase::Idle
        } else {
            PagingPhase::Exhausted
        }
    }
}

impl Default for PagingState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState for PagingState {}
