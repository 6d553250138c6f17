//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States are cloned out to the renderer and compared to detect changes, and
/// `Default` is the state before anything happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
