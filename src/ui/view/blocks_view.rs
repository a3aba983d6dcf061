use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, StatefulWidget, TableState, Widget};

use crate::tables::Record;
use crate::ui::lists::Blocks;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER};

/// Inputs for [`BlocksView`], sourced from selectors by the caller.
#[derive(Clone, Copy)]
pub struct BlocksProps<'a> {
    pub block_list: Option<&'a [Record]>,
    pub current_channel: Option<&'a str>,
    pub transaction: Option<&'a Record>,
    /// `(channel, tx_id)`; passed to the list unchanged.
    pub get_transaction: &'a dyn Fn(&str, &str),
}

/// Full-width card around the [`Blocks`] list.
///
/// Holds no state; row selection lives in the caller's `TableState`.
pub struct BlocksView<'a> {
    props: BlocksProps<'a>,
}

impl<'a> BlocksView<'a> {
    pub fn new(props: BlocksProps<'a>) -> Self {
        Self { props }
    }

    fn blocks(&self) -> Blocks<'a> {
        Blocks::new(
            self.props.block_list,
            self.props.current_channel,
            self.props.transaction,
            self.props.get_transaction,
        )
    }

    pub fn activate(&self, index: usize) -> bool {
        self.blocks().activate(index)
    }

    pub fn tx_hash(&self, index: usize) -> Option<String> {
        self.blocks().tx_hash(index)
    }
}

impl StatefulWidget for BlocksView<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = match self.props.current_channel {
            Some(channel) => format!(" Blocks · {channel} "),
            None => " Blocks ".to_string(),
        };
        let card = Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = card.inner(area);
        card.render(area, buf);
        self.blocks().render(inner, buf, state);
    }
}
