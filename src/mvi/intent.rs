/// Marker trait for intents.
///
/// Intents are either external signals (load more, refresh) or the
/// results of effects fed back into the loop (a page arrived).
pub trait Intent: Send + 'static {}
