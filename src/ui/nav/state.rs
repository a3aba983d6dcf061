use crate::tables::ResourceKind;
use crate::ui::mvi::UiState;

/// One dashboard tab per listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Blocks,
    Transactions,
    Peers,
    Chaincodes,
    Channels,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Blocks,
        Tab::Transactions,
        Tab::Peers,
        Tab::Chaincodes,
        Tab::Channels,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Blocks => "Blocks",
            Tab::Transactions => "Transactions",
            Tab::Peers => "Peers",
            Tab::Chaincodes => "Chaincodes",
            Tab::Channels => "Channels",
        }
    }

    /// The listing rendered by this tab.
    pub fn resource(self) -> ResourceKind {
        match self {
            Tab::Blocks => ResourceKind::BlockList,
            Tab::Transactions => ResourceKind::TransactionList,
            Tab::Peers => ResourceKind::PeerList,
            Tab::Chaincodes => ResourceKind::ChaincodeList,
            Tab::Channels => ResourceKind::Channels,
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub tab: Tab,
    /// Highlighted row in the active tab.
    pub selected: usize,
    /// Transaction detail is shown.
    pub detail: bool,
}

impl UiState for NavState {}
