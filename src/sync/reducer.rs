//! Reducer for synchronizer state transitions.

use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::intent::SyncIntent;
use super::state::SyncState;

/// Pure transition function shared by every synchronizer.
///
/// Results only land while a cycle is `Loading`; the commit gate makes sure
/// a stale cycle never gets this far, so an out-of-place result is dropped.
pub struct SyncReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for SyncReducer<T> {
    type State = SyncState<T>;
    type Intent = SyncIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SyncIntent::Start => SyncState::Loading,

            SyncIntent::Succeeded(value) => match state {
                SyncState::Loading => SyncState::Ready(value),
                other => other,
            },

            SyncIntent::Failed { message } => match state {
                SyncState::Loading => SyncState::Error(message),
                other => other,
            },

            SyncIntent::Reset => SyncState::Idle,
        }
    }
}
