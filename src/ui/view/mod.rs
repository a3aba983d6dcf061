//! Presentational views. Data and callbacks come from the caller.

mod blocks_view;

pub use blocks_view::{BlocksProps, BlocksView};
