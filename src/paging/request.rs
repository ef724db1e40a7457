//! Effects derived from a paging snapshot.
//!
//! Both predicates are re-evaluated after every reduction. An effect is
//! active while its predicate yields `Some`.

use crate::article::ArticleId;

use super::state::PagingState;

/// Parameters of the next page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Id of the last article already shown, if any.
    pub cursor: Option<ArticleId>,
    pub limit: usize,
}

/// The fetch that should be running for `state`, if any.
pub fn fetch_request(state: &PagingState) -> Option<FetchRequest> {
    if state.is_loading {
        Some(FetchRequest {
            cursor: state.last_article_id(),
            limit: state.page_size,
        })
    } else {
        None
    }
}

/// Whether the load-more input should stay subscribed.
pub fn scroll_subscription(state: &PagingState) -> Option<()> {
    state.can_load_more.then_some(())
}
