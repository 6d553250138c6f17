use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Per-cycle cancellation flag.
///
/// Cloned into the cycle's task; the owner flips it when the key changes or
/// the synchronizer is disposed. Flipping it never aborts the request itself.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark cancelled. Returns true on the first call only.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let task_side = token.clone();
        assert!(!task_side.is_cancelled());

        assert!(token.cancel());
        assert!(task_side.is_cancelled());
        assert!(!token.cancel());
    }
}
