use crate::ui::mvi::Intent;

use super::state::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    NextTab,
    PrevTab,
    SelectTab(Tab),
    /// `len` is the number of rows currently shown in the active tab.
    MoveUp { len: usize },
    MoveDown { len: usize },
    /// Keep the cursor inside a listing that just shrank.
    Clamp { len: usize },
    OpenDetail,
    CloseDetail,
}

impl Intent for NavIntent {}
