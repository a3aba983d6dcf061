use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::{NavState, Tab};

pub struct NavReducer;

impl NavReducer {
    fn switch_to(tab: Tab) -> NavState {
        NavState {
            tab,
            selected: 0,
            detail: false,
        }
    }
}

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::NextTab => Self::switch_to(state.tab.next()),
            NavIntent::PrevTab => Self::switch_to(state.tab.prev()),
            NavIntent::SelectTab(tab) if tab == state.tab => state,
            NavIntent::SelectTab(tab) => Self::switch_to(tab),
            NavIntent::MoveUp { len } => {
                let selected = if len == 0 {
                    0
                } else if state.selected == 0 {
                    len - 1
                } else {
                    state.selected.min(len) - 1
                };
                NavState {
                    selected,
                    detail: false,
                    ..state
                }
            }
            NavIntent::MoveDown { len } => {
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                NavState {
                    selected,
                    detail: false,
                    ..state
                }
            }
            NavIntent::Clamp { len } => NavState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
            NavIntent::OpenDetail => NavState {
                detail: true,
                ..state
            },
            NavIntent::CloseDetail => NavState {
                detail: false,
                ..state
            },
        }
    }
}
