//! Base trait for intents.

/// Marker trait for messages consumed by a reducer.
///
/// Intents are either user input (key presses, tab switches) or
/// system events (a fetched response, a channel selection).
pub trait Intent: Send + 'static {}
