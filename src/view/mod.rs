//! Adapters between the paging core and whatever renders the list.
//!
//! Both are pure: [`ListView`] maps a snapshot to display rows and
//! [`NearBottom`] turns scroll positions into load-more signals.

mod list;
mod scroll;

pub use list::{ListRow, ListView};
pub use scroll::{NearBottom, DEFAULT_NEAR_BOTTOM_THRESHOLD};
