use std::sync::Arc;

use crate::tables::payload::Record;
use crate::ui::mvi::UiState;

/// Rows of one list resource, replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct RowsSlice {
    pub rows: Arc<[Record]>,
}

impl RowsSlice {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows: rows.into() }
    }
}

/// The single transaction last opened from a listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionSlice {
    pub transaction: Option<Arc<Record>>,
}

/// All six slices. `None` means the resource has never been fetched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TablesState {
    pub block_list: Option<RowsSlice>,
    pub chaincode_list: Option<RowsSlice>,
    pub channels: Option<RowsSlice>,
    pub peer_list: Option<RowsSlice>,
    pub transaction: Option<TransactionSlice>,
    pub transaction_list: Option<RowsSlice>,
}

impl UiState for TablesState {}
