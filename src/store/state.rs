use crate::store::action::Action;
use crate::tables::{TablesReducer, TablesState};
use crate::ui::mvi::{Reducer, UiState};

/// Global state tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Channel whose tables are being browsed.
    pub current_channel: Option<String>,
    pub tables: TablesState,
}

impl UiState for AppState {}

/// Root reducer: routes each action to the slice that owns it.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppState {
            current_channel,
            tables,
        } = state;

        let current_channel = match &intent {
            Action::SelectChannel { channel } => Some(channel.clone()),
            _ => current_channel,
        };

        AppState {
            current_channel,
            tables: TablesReducer::reduce(tables, intent),
        }
    }
}
