//! The `tables` slice: a typed remote-data cache for explorer listings.
//!
//! # Architecture
//!
//! ```text
//! Operation ──GET──→ ApiClient
//!     │
//!     └─ decode payload ──→ Action ──→ Store ──→ TablesReducer ──→ TablesState
//!                                                                      │
//!                                          View ←── Selector ←─────────┘
//! ```
//!
//! - `payload.rs` - per-resource response schemas
//! - `actions.rs` - tagged messages and their creators
//! - `reducer.rs` - slice replacement (pure)
//! - `selectors.rs` - read-only projections of `AppState`
//! - `operations.rs` - fetch-and-dispatch, one per resource

pub mod actions;
mod kind;
pub mod operations;
mod payload;
mod reducer;
pub mod selectors;
mod state;

pub use actions::TablesAction;
pub use kind::ResourceKind;
pub use operations::{FetchOutcome, Operations};
pub use payload::{
    BlockListPayload, ChaincodeListPayload, ChannelsPayload, PeerListPayload, Record,
    TransactionListPayload, TransactionPayload,
};
pub use reducer::TablesReducer;
pub use state::{RowsSlice, TablesState, TransactionSlice};
