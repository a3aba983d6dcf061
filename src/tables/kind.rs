use std::fmt;

/// The six resources cached by the `tables` slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    BlockList,
    ChaincodeList,
    Channels,
    PeerList,
    Transaction,
    TransactionList,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::BlockList,
        ResourceKind::ChaincodeList,
        ResourceKind::Channels,
        ResourceKind::PeerList,
        ResourceKind::Transaction,
        ResourceKind::TransactionList,
    ];

    /// Message type tag carried by actions of this kind.
    pub fn action_type(self) -> &'static str {
        match self {
            ResourceKind::BlockList => "BLOCK_LIST",
            ResourceKind::ChaincodeList => "CHAINCODE_LIST",
            ResourceKind::Channels => "CHANNELS",
            ResourceKind::PeerList => "PEER_LIST",
            ResourceKind::Transaction => "TRANSACTION",
            ResourceKind::TransactionList => "TRANSACTION_LIST",
        }
    }

    /// Name of the slice this kind is stored under.
    pub fn slice_name(self) -> &'static str {
        match self {
            ResourceKind::BlockList => "blockList",
            ResourceKind::ChaincodeList => "chaincodeList",
            ResourceKind::Channels => "channels",
            ResourceKind::PeerList => "peerList",
            ResourceKind::Transaction => "transaction",
            ResourceKind::TransactionList => "transactionList",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slice_name())
    }
}
