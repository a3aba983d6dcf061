//! Base trait for state objects.

/// Marker trait for reducer state.
///
/// `Default` is the pre-fetch state; `PartialEq` lets callers skip
/// redraws and lets tests compare whole trees.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
