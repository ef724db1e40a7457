//! Feedback loop that drives the paging reducer.
//!
//! External signals and completed fetches are merged into one ordered
//! stream of intents. After each reduction the new snapshot is published
//! and the request predicates decide which effects should be running.

mod output;
mod slot;
mod system;

pub use output::{PagingUpdates, UPDATE_BUFFER};
pub use slot::{EffectSlot, SlotChange};
pub use system::{PagingInputs, PagingSession, PagingSystem};
