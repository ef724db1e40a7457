//! Article data sources.
//!
//! The paging core only sees [`ArticleSource`]; where articles live and
//! how long a fetch takes is up to the implementation.

pub mod corpus;
mod error;
mod memory;
mod timeout;

use async_trait::async_trait;

use crate::article::{Article, ArticleId};

pub use error::SourceError;
pub use memory::InMemorySource;
pub use timeout::TimedSource;

/// Capability to fetch one page of articles.
///
/// Contract:
/// - returns articles strictly after `cursor` in a stable order, or the
///   first `limit` articles when `cursor` is `None` or unknown
/// - returns fewer than `limit` articles only when nothing follows
/// - chained cursors never yield an article twice
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_page(
        &self,
        cursor: Option<ArticleId>,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError>;
}
