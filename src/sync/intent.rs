//! Intents for a synchronizer's state machine.

use crate::mvi::Intent;

/// Events produced by a fetch cycle or by the owner of a synchronizer.
#[derive(Debug, Clone)]
pub enum SyncIntent<T> {
    /// A new fetch cycle started.
    Start,

    /// The live cycle fetched its value.
    Succeeded(T),

    /// The live cycle failed.
    Failed { message: String },

    /// Nothing to fetch anymore (empty key).
    Reset,
}

impl<T: Send + 'static> Intent for SyncIntent<T> {}
