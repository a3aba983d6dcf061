//! REST endpoint templates, one per resource kind.

use std::fmt;

use crate::tables::ResourceKind;

/// A fully parameterised GET endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    BlockList { channel: String, offset: u64 },
    ChaincodeList { channel: String },
    Channels,
    PeerList { channel: String },
    Transaction { channel: String, tx_id: String },
    TransactionList { channel: String, from: u64, to: u64 },
}

impl Endpoint {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Endpoint::BlockList { .. } => ResourceKind::BlockList,
            Endpoint::ChaincodeList { .. } => ResourceKind::ChaincodeList,
            Endpoint::Channels => ResourceKind::Channels,
            Endpoint::PeerList { .. } => ResourceKind::PeerList,
            Endpoint::Transaction { .. } => ResourceKind::Transaction,
            Endpoint::TransactionList { .. } => ResourceKind::TransactionList,
        }
    }

    /// Request path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::BlockList { channel, offset } => {
                format!("/api/blockAndTxList/{}/{}", channel, offset)
            }
            Endpoint::ChaincodeList { channel } => format!("/api/chaincode/{}", channel),
            Endpoint::Channels => "/api/channels/info".to_string(),
            Endpoint::PeerList { channel } => format!("/api/peers/{}", channel),
            Endpoint::Transaction { channel, tx_id } => {
                format!("/api/transaction/{}/{}", channel, tx_id)
            }
            // The trailing slash is part of the backend route.
            Endpoint::TransactionList { channel, from, to } => {
                format!("/api/txList/{}/{}/{}/", channel, from, to)
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
