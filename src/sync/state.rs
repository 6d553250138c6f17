//! State of one synchronized remote resource.

use crate::mvi::UiState;

/// Status of a synchronizer.
///
/// Exactly one variant holds at a time. `Idle` means there is nothing to
/// fetch (no selection, or never activated); it is not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncState<T> {
    Idle,
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for SyncState<T> {
    fn default() -> Self {
        SyncState::Idle
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for SyncState<T> {}

impl<T> SyncState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// True once a cycle has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
