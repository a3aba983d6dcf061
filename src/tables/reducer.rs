//! Reducer for the `tables` slice.

use std::sync::Arc;

use crate::store::Action;
use crate::tables::actions::TablesAction;
use crate::tables::state::{RowsSlice, TablesState, TransactionSlice};
use crate::ui::mvi::Reducer;

/// Replaces exactly one slice per tables action.
///
/// Every other message is returned unchanged, including the store's
/// bootstrap `Init`.
pub struct TablesReducer;

impl Reducer for TablesReducer {
    type State = TablesState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let Action::Tables(action) = intent else {
            return state;
        };

        match action {
            TablesAction::BlockList(payload) => TablesState {
                block_list: Some(RowsSlice::new(payload.rows)),
                ..state
            },
            TablesAction::ChaincodeList(payload) => TablesState {
                chaincode_list: Some(RowsSlice::new(payload.chaincode)),
                ..state
            },
            TablesAction::Channels(payload) => TablesState {
                channels: Some(RowsSlice::new(payload.channels)),
                ..state
            },
            TablesAction::PeerList(payload) => TablesState {
                peer_list: Some(RowsSlice::new(payload.peers)),
                ..state
            },
            TablesAction::Transaction(payload) => TablesState {
                transaction: Some(TransactionSlice {
                    transaction: payload.row.map(Arc::new),
                }),
                ..state
            },
            TablesAction::TransactionList(payload) => TablesState {
                transaction_list: Some(RowsSlice::new(payload.rows)),
                ..state
            },
        }
    }
}
