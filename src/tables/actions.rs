//! Tagged messages for the `tables` slice and their creators.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::store::Action;
use crate::tables::kind::ResourceKind;
use crate::tables::payload::{
    BlockListPayload, ChaincodeListPayload, ChannelsPayload, PeerListPayload,
    TransactionListPayload, TransactionPayload,
};

/// A successful fetch, tagged with its resource kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TablesAction {
    BlockList(BlockListPayload),
    ChaincodeList(ChaincodeListPayload),
    Channels(ChannelsPayload),
    PeerList(PeerListPayload),
    Transaction(TransactionPayload),
    TransactionList(TransactionListPayload),
}

impl TablesAction {
    pub fn kind(&self) -> ResourceKind {
        match self {
            TablesAction::BlockList(_) => ResourceKind::BlockList,
            TablesAction::ChaincodeList(_) => ResourceKind::ChaincodeList,
            TablesAction::Channels(_) => ResourceKind::Channels,
            TablesAction::PeerList(_) => ResourceKind::PeerList,
            TablesAction::Transaction(_) => ResourceKind::Transaction,
            TablesAction::TransactionList(_) => ResourceKind::TransactionList,
        }
    }

    /// Decode a raw response body into the payload schema for `kind`.
    ///
    /// Never fails: a body of the wrong shape degrades to an empty payload,
    /// so a 2xx response always produces an action.
    pub fn decode(kind: ResourceKind, body: Value) -> Self {
        match kind {
            ResourceKind::BlockList => TablesAction::BlockList(payload_or_empty(kind, body)),
            ResourceKind::ChaincodeList => {
                TablesAction::ChaincodeList(payload_or_empty(kind, body))
            }
            ResourceKind::Channels => TablesAction::Channels(payload_or_empty(kind, body)),
            ResourceKind::PeerList => TablesAction::PeerList(payload_or_empty(kind, body)),
            ResourceKind::Transaction => TablesAction::Transaction(payload_or_empty(kind, body)),
            ResourceKind::TransactionList => {
                TablesAction::TransactionList(payload_or_empty(kind, body))
            }
        }
    }
}

fn payload_or_empty<T>(kind: ResourceKind, body: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(body).unwrap_or_else(|err| {
        tracing::warn!("malformed {} payload, storing empty: {}", kind.action_type(), err);
        T::default()
    })
}

pub fn get_block_list(payload: BlockListPayload) -> Action {
    Action::Tables(TablesAction::BlockList(payload))
}

pub fn get_chaincode_list(payload: ChaincodeListPayload) -> Action {
    Action::Tables(TablesAction::ChaincodeList(payload))
}

pub fn get_channels(payload: ChannelsPayload) -> Action {
    Action::Tables(TablesAction::Channels(payload))
}

pub fn get_peer_list(payload: PeerListPayload) -> Action {
    Action::Tables(TablesAction::PeerList(payload))
}

pub fn get_transaction(payload: TransactionPayload) -> Action {
    Action::Tables(TablesAction::Transaction(payload))
}

pub fn get_transaction_list(payload: TransactionListPayload) -> Action {
    Action::Tables(TablesAction::TransactionList(payload))
}
