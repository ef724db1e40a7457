//! Model-View-Intent primitives for the paging core.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers
//!    ↑                     │
//!    └──── feedback ───────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced on every intent
//! - **Intent**: user signals or completed effects
//! - **Reducer**: pure function `(State, Intent) -> State`
//!
//! Effects never run inside a reducer; the feedback loop derives them
//! from each new state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
