//! Model-View-Intent (MVI) primitives.
//!
//! Both the application store and the dashboard's navigation state are
//! driven through these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, everything a view needs to render
//! - **Intent**: Key presses, fetched responses, channel changes
//! - **Reducer**: Pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
