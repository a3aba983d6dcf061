//! Dashboard navigation: active tab, row selection, detail pane.
//!
//! - `state.rs` - tab and cursor
//! - `intent.rs` - key-driven navigation events
//! - `reducer.rs` - transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, Tab};
