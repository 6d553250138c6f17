//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a system event (a fetch cycle started, succeeded or
/// failed) or an owner action (the selection was cleared). Intents cross
/// from fetch tasks to the owning screen, hence `Send`.
pub trait Intent: Send + 'static {}
