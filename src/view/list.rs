use crate::paging::PagingState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub title: String,
}

/// Display model derived from a [`PagingState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<ListRow>,
    /// Footer loader is shown while more pages can be loaded.
    pub show_loader: bool,
    pub is_loading: bool,
}

impl ListView {
    pub fn from_state(state: &PagingState) -> Self {
        let rows = state
            .articles
            .iter()
            .map(|article| ListRow {
                title: article.title().to_string(),
            })
            .collect();
        Self {
            rows,
            show_loader: state.can_load_more,
            is_loading: state.is_loading,
        }
    }

    /// Rows visible in a window of `height` rows starting at `offset`.
    pub fn window(&self, offset: usize, height: usize) -> &[ListRow] {
        let start = offset.min(self.rows.len());
        let end = start.saturating_add(height).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Height of the scrollable content, counting the loader footer.
    pub fn content_height(&self) -> usize {
        self.rows.len() + usize::from(self.show_loader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::corpus::sample_corpus;

    #[test]
    fn rows_follow_article_order() {
        let state = PagingState {
            articles: sample_corpus(3),
            page_size: 20,
            is_loading: false,
            can_load_more: false,
        };
        let view = ListView::from_state(&state);
        let titles: Vec<_> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Article #1", "Article #2", "Article #3"]);
        assert!(!view.show_loader);
        assert_eq!(view.content_height(), 3);
    }

    #[test]
    fn loader_shown_while_more_available() {
        let view = ListView::from_state(&PagingState::default());
        assert!(view.show_loader);
        assert!(view.is_loading);
        assert_eq!(view.content_height(), 1);
    }

    #[test]
    fn window_clamps_to_rows() {
        let state = PagingState {
            articles: sample_corpus(5),
            ..PagingState::default()
        };
        let view = ListView::from_state(&state);
        assert_eq!(view.window(3, 10).len(), 2);
        assert!(view.window(9, 10).is_empty());
    }
}
