//! Read-only projections from `AppState`.
//!
//! A slice that was never fetched reads as `None`.

use crate::store::AppState;
use crate::tables::kind::ResourceKind;
use crate::tables::payload::Record;
use crate::tables::state::RowsSlice;

fn rows(slice: &Option<RowsSlice>) -> Option<&[Record]> {
    slice.as_ref().map(|slice| &*slice.rows)
}

pub fn block_list_selector(state: &AppState) -> Option<&[Record]> {
    rows(&state.tables.block_list)
}

pub fn chaincode_list_selector(state: &AppState) -> Option<&[Record]> {
    rows(&state.tables.chaincode_list)
}

pub fn channels_selector(state: &AppState) -> Option<&[Record]> {
    rows(&state.tables.channels)
}

pub fn peer_list_selector(state: &AppState) -> Option<&[Record]> {
    rows(&state.tables.peer_list)
}

pub fn transaction_selector(state: &AppState) -> Option<&Record> {
    state
        .tables
        .transaction
        .as_ref()
        .and_then(|slice| slice.transaction.as_deref())
}

pub fn transaction_list_selector(state: &AppState) -> Option<&[Record]> {
    rows(&state.tables.transaction_list)
}

pub fn current_channel_selector(state: &AppState) -> Option<&str> {
    state.current_channel.as_deref()
}

/// Rows of any listing by kind. `Transaction` is a single record, so it
/// never yields rows here; use [`transaction_selector`].
pub fn rows_selector(state: &AppState, kind: ResourceKind) -> Option<&[Record]> {
    match kind {
        ResourceKind::BlockList => block_list_selector(state),
        ResourceKind::ChaincodeList => chaincode_list_selector(state),
        ResourceKind::Channels => channels_selector(state),
        ResourceKind::PeerList => peer_list_selector(state),
        ResourceKind::TransactionList => transaction_list_selector(state),
        ResourceKind::Transaction => None,
    }
}

/// Channel names reported by `/api/channels/info`, in backend order.
pub fn channel_names_selector(state: &AppState) -> Vec<&str> {
    channels_selector(state)
        .unwrap_or_default()
        .iter()
        .filter_map(|record| record.get("channelname").and_then(|v| v.as_str()))
        .collect()
}
