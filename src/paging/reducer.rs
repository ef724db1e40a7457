use crate::mvi::Reducer;

use super::intent::PagingIntent;
use super::state::PagingState;

/// Reducer for the paged list.
///
/// Pure function: issuing fetches and tracking loading cycles is done by
/// the feedback loop around the dispatch call.
pub struct PagingReducer;

impl Reducer for PagingReducer {
    type State = PagingState;
    type Intent = PagingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PagingIntent::LoadMore => {
                if state.can_load_more {
                    PagingState {
                        is_loading: true,
                        ..state
                    }
                } else {
                    state
                }
            }

            PagingIntent::Loaded { articles } => {
                // A short page is the only end-of-data signal.
                let can_load_more = articles.len() >= state.page_size;
                let mut all = state.articles;
                all.extend(articles);
                PagingState {
                    articles: all,
                    page_size: state.page_size,
                    is_loading: false,
                    can_load_more,
                }
            }

            PagingIntent::Refresh => PagingState::new(state.page_size),

            PagingIntent::LoadFailed { .. } => PagingState {
                is_loading: false,
                ..state
            },
        }
    }
}
