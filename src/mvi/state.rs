/// Marker trait for reducer state.
///
/// Snapshots are cloned into the output channel, compared to detect
/// changes, and have a well-defined initial value.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
