//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `(State, Intent) -> State`, with no side effects. Intents a reducer
/// does not handle must return the state unchanged.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
