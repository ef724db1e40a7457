mod common;

use common::idle;
use pagefeed::mvi::Reducer;
use pagefeed::paging::{
    fetch_request, scroll_subscription, FetchRequest, PagingIntent, PagingPhase, PagingReducer,
    PagingState,
};
use pagefeed::source::corpus::sample_corpus;

fn loaded(articles: &[pagefeed::article::Article]) -> PagingIntent {
    PagingIntent::Loaded {
        articles: articles.to_vec(),
    }
}

fn sample_states() -> Vec<PagingState> {
    let corpus = sample_corpus(45);
    vec![
        PagingState::default(),
        idle(&corpus[0..20], true),
        idle(&corpus, false),
        PagingState {
            is_loading: true,
            ..idle(&corpus[0..40], true)
        },
        PagingState {
            page_size: 7,
            ..idle(&corpus[0..3], false)
        },
    ]
}

#[test]
fn load_more_while_loading_derives_no_new_request() {
    for state in sample_states().into_iter().filter(|s| s.is_loading) {
        let pending = fetch_request(&state);
        let mut next = state.clone();
        for _ in 0..3 {
            next = PagingReducer::reduce(next, PagingIntent::LoadMore);
            assert_eq!(next, state);
            assert_eq!(fetch_request(&next), pending);
        }
    }
}

#[test]
fn pages_accumulate_in_arrival_order() {
    let corpus = sample_corpus(60);
    let pages = [&corpus[0..20], &corpus[20..40], &corpus[40..55]];

    let mut state = PagingState::default();
    let mut expected_len = 0;
    for page in pages {
        state = PagingReducer::reduce(state, PagingIntent::LoadMore);
        state = PagingReducer::reduce(state, loaded(page));
        expected_len += page.len();
        assert_eq!(state.articles.len(), expected_len);
    }
    assert_eq!(state.articles, corpus[0..55].to_vec());
}

#[test]
fn short_page_converges_to_exhausted() {
    let corpus = sample_corpus(60);
    for short_len in [0, 1, 19] {
        let mut state = PagingState::default();
        state = PagingReducer::reduce(state, loaded(&corpus[0..20]));
        assert!(state.can_load_more);
        state = PagingReducer::reduce(state, PagingIntent::LoadMore);
        state = PagingReducer::reduce(state, loaded(&corpus[20..20 + short_len]));
        assert_eq!(state.phase(), PagingPhase::Exhausted);

        // Nothing but a refresh brings it back.
        for intent in [
            PagingIntent::LoadMore,
            PagingIntent::LoadFailed {
                message: "late".into(),
            },
            PagingIntent::LoadMore,
        ] {
            state = PagingReducer::reduce(state, intent);
            assert!(!state.can_load_more);
            assert_eq!(fetch_request(&state), None);
            assert_eq!(scroll_subscription(&state), None);
        }

        state = PagingReducer::reduce(state, PagingIntent::Refresh);
        assert!(state.can_load_more);
    }
}

#[test]
fn refresh_resets_any_state() {
    for state in sample_states() {
        let page_size = state.page_size;
        let next = PagingReducer::reduce(state, PagingIntent::Refresh);
        assert!(next.articles.is_empty());
        assert!(next.is_loading);
        assert!(next.can_load_more);
        assert_eq!(next.page_size, page_size);
        assert_eq!(
            fetch_request(&next),
            Some(FetchRequest {
                cursor: None,
                limit: page_size
            })
        );
    }
}

#[test]
fn scenario_reductions() {
    let corpus = sample_corpus(60);
    let mut state = PagingState::default();

    state = PagingReducer::reduce(state, loaded(&corpus[0..20]));
    assert_eq!(state, idle(&corpus[0..20], true));

    state = PagingReducer::reduce(state, PagingIntent::LoadMore);
    assert_eq!(
        fetch_request(&state),
        Some(FetchRequest {
            cursor: Some(corpus[19].id()),
            limit: 20
        })
    );
    state = PagingReducer::reduce(state, loaded(&corpus[20..40]));
    assert_eq!(state, idle(&corpus[0..40], true));

    state = PagingReducer::reduce(state, PagingIntent::LoadMore);
    state = PagingReducer::reduce(state, loaded(&corpus[40..60]));
    assert_eq!(state, idle(&corpus[0..60], true));

    state = PagingReducer::reduce(state, PagingIntent::Refresh);
    assert_eq!(state, PagingState::default());

    state = PagingReducer::reduce(state, loaded(&corpus[0..20]));
    assert_eq!(state, idle(&corpus[0..20], true));
}

#[test]
fn failure_keeps_cursor_for_retry() {
    let corpus = sample_corpus(40);
    let mut state = PagingReducer::reduce(PagingState::default(), loaded(&corpus[0..20]));
    state = PagingReducer::reduce(state, PagingIntent::LoadMore);
    let request = fetch_request(&state);

    state = PagingReducer::reduce(
        state,
        PagingIntent::LoadFailed {
            message: "offline".into(),
        },
    );
    assert_eq!(state.phase(), PagingPhase::Idle);
    assert_eq!(fetch_request(&state), None);

    state = PagingReducer::reduce(state, PagingIntent::LoadMore);
    assert_eq!(fetch_request(&state), request);
}
