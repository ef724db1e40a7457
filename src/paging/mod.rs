//! Incremental pagination state machine.
//!
//! Holds the accumulated article list and the flags that decide whether
//! a page fetch should be running. The reducer is pure; the predicates in
//! [`request`] turn each snapshot into the effect that should be active.

mod intent;
mod reducer;
mod request;
mod state;

pub use intent::PagingIntent;
pub use reducer::PagingReducer;
pub use request::{fetch_request, scroll_subscription, FetchRequest};
pub use state::{PagingPhase, PagingState, DEFAULT_PAGE_SIZE};
