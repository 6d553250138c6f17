//! Remote-resource synchronizers.
//!
//! Both screens use the same lifecycle: a status value (`SyncState`) driven
//! by a pure reducer, one live fetch cycle at a time, and a per-cycle
//! cancellation flag checked before every commit.
//!
//! - `state.rs` / `intent.rs` / `reducer.rs` - the state machine
//! - `cancel.rs` - per-cycle cancellation flag
//! - `lifecycle.rs` - generic cycle management and commit gate
//! - `detail.rs` / `list.rs` - the two concrete synchronizers

mod cancel;
mod detail;
mod intent;
mod lifecycle;
mod list;
mod reducer;
mod state;

pub use cancel::CancelToken;
pub use detail::DetailSynchronizer;
pub use intent::SyncIntent;
pub use lifecycle::{Cycle, Synchronizer};
pub use list::ListSynchronizer;
pub use reducer::SyncReducer;
pub use state::SyncState;
