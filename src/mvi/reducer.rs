//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: (State, Intent) -> State.
///
/// Reducers never perform I/O. Network requests and cancellation live in
/// the synchronizers that dispatch into them.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
