use crate::article::Article;
use crate::mvi::Intent;

/// Events folded into [`PagingState`](super::PagingState).
#[derive(Debug, Clone, PartialEq)]
pub enum PagingIntent {
    /// Viewport reached the bottom of the list.
    LoadMore,

    /// A page fetch completed.
    Loaded { articles: Vec<Article> },

    /// User asked to reload the list from the first page.
    Refresh,

    /// A page fetch failed. Loading stops; exhaustion is not advanced.
    LoadFailed { message: String },
}

impl Intent for PagingIntent {}
