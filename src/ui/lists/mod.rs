//! List renderers for fetched tables.

mod blocks;
mod records;

pub use blocks::Blocks;
pub use records::{
    cell_text, columns_for, transaction_lines, Column, RecordTable, BLOCK_TX_KEY,
    TRANSACTION_TX_KEY,
};
