use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};

use crate::paging::PagingState;

/// Snapshots a slow subscriber may fall behind by before it lags.
pub const UPDATE_BUFFER: usize = 64;

/// Publish point for reduced snapshots.
///
/// The watch slot holds the latest snapshot for late subscribers; the
/// broadcast channel carries every snapshot in reduction order.
pub(super) struct StateOutput {
    latest: watch::Sender<PagingState>,
    updates: broadcast::Sender<PagingState>,
}

impl StateOutput {
    pub(super) fn new(initial: PagingState) -> Self {
        let (latest, _) = watch::channel(initial);
        let (updates, _) = broadcast::channel(UPDATE_BUFFER);
        Self { latest, updates }
    }

    /// Replace the latest snapshot and broadcast it.
    ///
    /// The broadcast happens under the watch write lock so a concurrent
    /// `updates()` sees either the old snapshot plus this one, or only
    /// this one.
    pub(super) fn publish(&self, state: PagingState) {
        self.latest.send_modify(|latest| {
            *latest = state.clone();
            if self.updates.send(state).is_err() {
                tracing::trace!("No update subscribers");
            }
        });
    }

    pub(super) fn latest(&self) -> watch::Receiver<PagingState> {
        self.latest.subscribe()
    }

    pub(super) fn current(&self) -> PagingState {
        self.latest.borrow().clone()
    }

    pub(super) fn updates(&self) -> PagingUpdates {
        let latest = self.latest.borrow();
        let receiver = self.updates.subscribe();
        PagingUpdates {
            replay: Some(latest.clone()),
            receiver,
        }
    }
}

/// Ordered stream of every published snapshot.
///
/// The first item is the snapshot current at subscription time; each
/// later reduction follows in order.
pub struct PagingUpdates {
    replay: Option<PagingState>,
    receiver: broadcast::Receiver<PagingState>,
}

impl PagingUpdates {
    /// Next snapshot, or `None` once the session is gone.
    ///
    /// A subscriber that falls more than [`UPDATE_BUFFER`] snapshots behind
    /// skips the oldest ones and resumes from the oldest still buffered.
    pub async fn recv(&mut self) -> Option<PagingState> {
        if let Some(state) = self.replay.take() {
            return Some(state);
        }
        loop {
            match self.receiver.recv().await {
                Ok(state) => return Some(state),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Snapshot subscriber lagged, skipping ahead");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
