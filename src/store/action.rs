use crate::tables::TablesAction;
use crate::ui::mvi::Intent;

/// Every message the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Bootstrap message dispatched once when the store is created.
    Init,
    /// The user picked a channel to browse.
    SelectChannel { channel: String },
    /// A fetched resource.
    Tables(TablesAction),
}

impl Action {
    pub fn action_type(&self) -> &'static str {
        match self {
            Action::Init => "@@INIT",
            Action::SelectChannel { .. } => "SELECT_CHANNEL",
            Action::Tables(action) => action.kind().action_type(),
        }
    }
}

impl Intent for Action {}
