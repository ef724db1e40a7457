use std::pin::pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::article::Article;
use crate::mvi::Reducer;
use crate::paging::{
    fetch_request, scroll_subscription, FetchRequest, PagingIntent, PagingReducer, PagingState,
};
use crate::source::{ArticleSource, SourceError};

use super::output::{PagingUpdates, StateOutput};
use super::slot::{EffectSlot, SlotChange};

/// Fetch request tagged with the loading cycle it was derived in.
///
/// Refresh bumps the cycle, so the first page of a new cycle is always
/// a distinct request even when its cursor and limit are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CycleRequest {
    cycle: u64,
    request: FetchRequest,
}

struct FetchOutcome {
    cycle: u64,
    result: Result<Vec<Article>, SourceError>,
}

/// Paging state machine wired to an article source.
pub struct PagingSystem {
    source: Arc<dyn ArticleSource>,
    page_size: usize,
}

impl PagingSystem {
    pub fn new(source: Arc<dyn ArticleSource>, page_size: usize) -> Self {
        Self { source, page_size }
    }

    /// Start the event loop with caller-provided signal streams.
    ///
    /// The loop runs on the current tokio runtime until both streams end
    /// or the returned session is dropped.
    pub fn run<L, R>(self, load_more: L, refresh: R) -> PagingSession
    where
        L: Stream<Item = ()> + Send + 'static,
        R: Stream<Item = ()> + Send + 'static,
    {
        let initial = PagingState::new(self.page_size);
        let states = Arc::new(StateOutput::new(initial.clone()));
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        let event_loop = EventLoop {
            source: self.source,
            state: initial,
            cycle: 0,
            fetch_slot: EffectSlot::new(),
            scroll_slot: EffectSlot::new(),
            in_flight: None,
            results: results_tx,
            states: Arc::clone(&states),
        };

        tracing::debug!(page_size = self.page_size, "Paging session started");
        let task = tokio::spawn(event_loop.run(load_more, refresh, results_rx));

        PagingSession {
            states,
            task: Some(task),
        }
    }

    /// Start the event loop fed by channel-backed inputs.
    pub fn spawn(self) -> (PagingSession, PagingInputs) {
        let (load_more_tx, load_more_rx) = mpsc::unbounded_channel();
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        let session = self.run(receiver_stream(load_more_rx), receiver_stream(refresh_rx));
        let inputs = PagingInputs {
            load_more: load_more_tx,
            refresh: refresh_tx,
        };
        (session, inputs)
    }
}

fn receiver_stream(rx: mpsc::UnboundedReceiver<()>) -> impl Stream<Item = ()> + Send + 'static {
    futures::stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|signal| (signal, rx)) })
}

/// Sending side of the paging inputs. Cheap to clone.
#[derive(Clone)]
pub struct PagingInputs {
    load_more: mpsc::UnboundedSender<()>,
    refresh: mpsc::UnboundedSender<()>,
}

impl PagingInputs {
    /// Signal that the viewport is near the bottom of the list.
    ///
    /// Returns false if the session has ended.
    pub fn load_more(&self) -> bool {
        self.load_more.send(()).is_ok()
    }

    /// Ask for the list to be reloaded from the first page.
    ///
    /// Returns false if the session has ended.
    pub fn refresh(&self) -> bool {
        self.refresh.send(()).is_ok()
    }
}

/// Handle to a running paging loop.
///
/// Dropping the session stops the loop and any fetch it has in flight.
pub struct PagingSession {
    states: Arc<StateOutput>,
    task: Option<JoinHandle<()>>,
}

impl PagingSession {
    /// Watch the latest snapshot.
    ///
    /// The receiver sees the current snapshot immediately through
    /// `borrow()`. A slow reader may miss intermediate snapshots; use
    /// [`updates`](Self::updates) to observe every one.
    pub fn subscribe(&self) -> watch::Receiver<PagingState> {
        self.states.latest()
    }

    /// Every published snapshot in reduction order, starting with the
    /// current one.
    pub fn updates(&self) -> PagingUpdates {
        self.states.updates()
    }

    pub fn current(&self) -> PagingState {
        self.states.current()
    }

    /// Stop the loop without waiting for pending fetches.
    pub fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the loop to end on its own (both inputs closed).
    pub async fn join(mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        if let Err(err) = task.await {
            if !err.is_cancelled() {
                tracing::error!(error = %err, "Paging loop panicked");
            }
        }
    }
}

impl Drop for PagingSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct EventLoop {
    source: Arc<dyn ArticleSource>,
    state: PagingState,
    /// Current loading cycle; bumped on every refresh.
    cycle: u64,
    fetch_slot: EffectSlot<CycleRequest>,
    scroll_slot: EffectSlot<()>,
    in_flight: Option<JoinHandle<()>>,
    results: mpsc::UnboundedSender<FetchOutcome>,
    states: Arc<StateOutput>,
}

impl EventLoop {
    async fn run<L, R>(
        mut self,
        load_more: L,
        refresh: R,
        mut results: mpsc::UnboundedReceiver<FetchOutcome>,
    ) where
        L: Stream<Item = ()>,
        R: Stream<Item = ()>,
    {
        let mut load_more = pin!(load_more);
        let mut refresh = pin!(refresh);
        let mut load_more_open = true;
        let mut refresh_open = true;

        // The initial snapshot already asks for the first page.
        self.apply_feedback();

        while load_more_open || refresh_open {
            tokio::select! {
                signal = load_more.next(), if load_more_open => match signal {
                    Some(()) => self.on_load_more(),
                    None => load_more_open = false,
                },
                signal = refresh.next(), if refresh_open => match signal {
                    Some(()) => self.dispatch(PagingIntent::Refresh),
                    None => refresh_open = false,
                },
                Some(outcome) = results.recv() => self.on_fetch_outcome(outcome),
            }
        }

        tracing::debug!(cycle = self.cycle, "Paging inputs closed, session ending");
    }

    fn on_load_more(&mut self) {
        if self.scroll_slot.is_active() {
            self.dispatch(PagingIntent::LoadMore);
        } else {
            tracing::trace!("Load-more signal ignored: list exhausted");
        }
    }

    fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.cycle != self.cycle {
            tracing::debug!(
                stale_cycle = outcome.cycle,
                cycle = self.cycle,
                "Discarding page from superseded loading cycle"
            );
            return;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(articles) => {
                tracing::debug!(cycle = self.cycle, count = articles.len(), "Page loaded");
                self.dispatch(PagingIntent::Loaded { articles });
            }
            Err(err) => {
                tracing::warn!(cycle = self.cycle, error = %err, "Page fetch failed");
                self.dispatch(PagingIntent::LoadFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    fn dispatch(&mut self, intent: PagingIntent) {
        if matches!(intent, PagingIntent::Refresh) {
            self.cycle += 1;
            tracing::debug!(cycle = self.cycle, "Refresh: new loading cycle");
        }

        let state = std::mem::take(&mut self.state);
        self.state = PagingReducer::reduce(state, intent);
        self.states.publish(self.state.clone());
        self.apply_feedback();
    }

    fn apply_feedback(&mut self) {
        let request = fetch_request(&self.state).map(|request| CycleRequest {
            cycle: self.cycle,
            request,
        });
        match self.fetch_slot.update(request) {
            SlotChange::Start(request) => self.issue_fetch(request),
            SlotChange::Stop => {
                if let Some(task) = self.in_flight.take() {
                    task.abort();
                }
            }
            SlotChange::Unchanged => {}
        }

        match self.scroll_slot.update(scroll_subscription(&self.state)) {
            SlotChange::Start(()) => tracing::trace!("Load-more input subscribed"),
            SlotChange::Stop => tracing::debug!("Load-more input unsubscribed: list exhausted"),
            SlotChange::Unchanged => {}
        }
    }

    fn issue_fetch(&mut self, CycleRequest { cycle, request }: CycleRequest) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        tracing::debug!(
            cycle,
            cursor = ?request.cursor,
            limit = request.limit,
            "Issuing page fetch"
        );

        let source = Arc::clone(&self.source);
        let results = self.results.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_page(request.cursor, request.limit).await;
            if results.send(FetchOutcome { cycle, result }).is_err() {
                tracing::trace!("Page fetch result dropped (paging loop gone)");
            }
        }));
    }
}

impl Drop for EventLoop {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
