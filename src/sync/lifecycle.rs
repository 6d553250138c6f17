//! Lifecycle shared by every synchronizer.
//!
//! A synchronizer owns at most one live fetch cycle. Starting a new cycle
//! cancels the previous one; a cancelled cycle can never commit. Cancellation
//! and commit both take the same lock, so a result racing a key change either
//! lands before the cancel or not at all.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::catalog::CatalogError;
use crate::mvi::Reducer;

use super::cancel::CancelToken;
use super::intent::SyncIntent;
use super::reducer::SyncReducer;
use super::state::SyncState;

struct Shared<T> {
    /// Last value committed as `Ready`. The lock doubles as the commit gate.
    committed: Mutex<Option<T>>,
    state: watch::Sender<SyncState<T>>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Shared<T> {
    /// Apply `intent`. Callers must hold the commit gate.
    fn dispatch(&self, committed: &mut Option<T>, intent: SyncIntent<T>) {
        self.state.send_modify(|state| {
            *state = SyncReducer::reduce(std::mem::take(state), intent);
            if let SyncState::Ready(value) = state {
                *committed = Some(value.clone());
            }
        });
    }
}

/// Generic owner of one remote-fetch lifecycle.
pub struct Synchronizer<T> {
    shared: Arc<Shared<T>>,
    current: Option<CancelToken>,
    cycles: u64,
    disposed: bool,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Synchronizer<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SyncState::Idle);
        Self {
            shared: Arc::new(Shared {
                committed: Mutex::new(None),
                state,
            }),
            current: None,
            cycles: 0,
            disposed: false,
        }
    }

    pub fn state(&self) -> SyncState<T> {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SyncState<T>> {
        self.shared.state.subscribe()
    }

    /// Last successfully committed value, kept across later cycles.
    pub fn last_ready(&self) -> Option<T> {
        self.shared.committed.lock().clone()
    }

    /// Cancel the live cycle and start a new one in `Loading`.
    ///
    /// Returns `None` once disposed.
    pub fn begin(&mut self) -> Option<Cycle<T>> {
        if self.disposed {
            return None;
        }

        let token = CancelToken::new();
        {
            let mut committed = self.shared.committed.lock();
            if let Some(previous) = self.current.replace(token.clone()) {
                previous.cancel();
            }
            self.shared.dispatch(&mut committed, SyncIntent::Start);
        }

        self.cycles += 1;
        tracing::debug!(cycle = self.cycles, "Fetch cycle started");

        Some(Cycle {
            shared: Arc::clone(&self.shared),
            token,
            id: self.cycles,
        })
    }

    /// Cancel the live cycle and return to `Idle`.
    pub fn reset(&mut self) {
        if self.disposed {
            return;
        }
        let mut committed = self.shared.committed.lock();
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
        self.shared.dispatch(&mut committed, SyncIntent::Reset);
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Default for Synchronizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Synchronizer<T> {
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tear down: cancel the live cycle and refuse new ones.
    ///
    /// State is left as it was; a pending cycle stays inert.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        let _gate = self.shared.committed.lock();
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
    }
}

impl<T> Drop for Synchronizer<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Handle held by one in-flight fetch cycle.
pub struct Cycle<T> {
    shared: Arc<Shared<T>>,
    token: CancelToken,
    id: u64,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Cycle<T> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Commit the cycle's outcome unless it was cancelled.
    ///
    /// Returns whether state was touched.
    pub fn commit(self, result: Result<T, CatalogError>) -> bool {
        let mut committed = self.shared.committed.lock();
        if self.token.is_cancelled() {
            tracing::debug!(cycle = self.id, "Discarding result of cancelled cycle");
            return false;
        }

        let intent = match result {
            Ok(value) => SyncIntent::Succeeded(value),
            Err(e) => SyncIntent::Failed {
                message: e.user_message(),
            },
        };
        self.shared.dispatch(&mut committed, intent);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_enters_loading() {
        let mut sync: Synchronizer<u32> = Synchronizer::new();
        assert!(sync.state().is_idle());
        let cycle = sync.begin().unwrap();
        assert_eq!(cycle.id(), 1);
        assert!(sync.state().is_loading());
    }

    #[test]
    fn commit_success_is_ready_and_retained() {
        let mut sync: Synchronizer<u32> = Synchronizer::new();
        let cycle = sync.begin().unwrap();
        assert!(cycle.commit(Ok(25)));
        assert_eq!(sync.state(), SyncState::Ready(25));
        assert_eq!(sync.last_ready(), Some(25));
    }

    #[test]
    fn superseded_cycle_cannot_commit() {
        let mut sync: Synchronizer<&'static str> = Synchronizer::new();
        let first = sync.begin().unwrap();
        let second = sync.begin().unwrap();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());

        assert!(second.commit(Ok("b")));
        assert!(!first.commit(Ok("a")));
        assert_eq!(sync.state(), SyncState::Ready("b"));
    }

    #[test]
    fn failure_keeps_last_ready_value() {
        let mut sync: Synchronizer<u32> = Synchronizer::new();
        sync.begin().unwrap().commit(Ok(1));
        let cycle = sync.begin().unwrap();
        cycle.commit(Err(CatalogError::Status {
            status: 500,
            url: "http://localhost/pokemon".into(),
        }));
        assert_eq!(sync.state(), SyncState::Error("Request failed: 500".into()));
        assert_eq!(sync.last_ready(), Some(1));
    }

    #[test]
    fn reset_cancels_and_idles() {
        let mut sync: Synchronizer<u32> = Synchronizer::new();
        let cycle = sync.begin().unwrap();
        sync.reset();
        assert!(sync.state().is_idle());
        assert!(!cycle.commit(Ok(7)));
        assert!(sync.state().is_idle());
    }

    #[test]
    fn disposed_cycle_is_inert() {
        let mut sync: Synchronizer<u32> = Synchronizer::new();
        let cycle = sync.begin().unwrap();
        sync.dispose();
        assert!(sync.is_disposed());
        assert!(!cycle.commit(Ok(7)));
        // loading is not cleared by a cancelled cycle
        assert!(sync.state().is_loading());
        assert!(sync.begin().is_none());
    }

    #[test]
    fn drop_cancels_live_cycle() {
        let mut sync: Synchronizer<u32> = Synchronizer::new();
        let cycle = sync.begin().unwrap();
        drop(sync);
        assert!(cycle.is_cancelled());
        assert!(!cycle.commit(Ok(1)));
    }

    #[test]
    fn subscribers_see_transitions() {
        let mut sync: Synchronizer<u32> = Synchronizer::new();
        let mut rx = sync.subscribe();
        let cycle = sync.begin().unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_loading());
        cycle.commit(Ok(3));
        assert_eq!(*rx.borrow_and_update(), SyncState::Ready(3));
    }
}
