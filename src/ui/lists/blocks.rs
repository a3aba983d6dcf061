use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, StatefulWidget, TableState, Widget, Wrap};
use serde_json::Value;

use crate::tables::{Record, ResourceKind};
use crate::ui::lists::records::{columns_for, transaction_lines, RecordTable, BLOCK_TX_KEY};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER};

/// Block listing with an optional transaction detail pane.
///
/// Activating a row asks `get_transaction` for the first transaction of
/// that block on the current channel.
#[derive(Clone, Copy)]
pub struct Blocks<'a> {
    block_list: Option<&'a [Record]>,
    current_channel: Option<&'a str>,
    transaction: Option<&'a Record>,
    get_transaction: &'a dyn Fn(&str, &str),
}

impl<'a> Blocks<'a> {
    pub fn new(
        block_list: Option<&'a [Record]>,
        current_channel: Option<&'a str>,
        transaction: Option<&'a Record>,
        get_transaction: &'a dyn Fn(&str, &str),
    ) -> Self {
        Self {
            block_list,
            current_channel,
            transaction,
            get_transaction,
        }
    }

    /// First transaction hash of the block at `index`.
    pub fn tx_hash(&self, index: usize) -> Option<String> {
        let record = self.block_list?.get(index)?;
        match record.get(BLOCK_TX_KEY)? {
            Value::Array(hashes) => hashes.first()?.as_str().map(str::to_string),
            Value::String(hash) => Some(hash.clone()),
            _ => None,
        }
    }

    /// Request the transaction behind row `index`. Returns false when the
    /// row has no transaction or no channel is known.
    pub fn activate(&self, index: usize) -> bool {
        let Some(tx_id) = self.tx_hash(index) else {
            return false;
        };
        let channel = self.current_channel.or_else(|| {
            self.block_list?
                .get(index)?
                .get("channelname")
                .and_then(Value::as_str)
        });
        let Some(channel) = channel else {
            return false;
        };

        (self.get_transaction)(channel, &tx_id);
        true
    }
}

impl StatefulWidget for Blocks<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let table = RecordTable::new(self.block_list, columns_for(ResourceKind::BlockList));

        let Some(transaction) = self.transaction else {
            table.render(area, buf, state);
            return;
        };

        let [list_area, detail_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(area);

        table.render(list_area, buf, state);
        Paragraph::new(transaction_lines(transaction))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(Span::styled(" Transaction ", Style::default().fg(ACCENT)))
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(detail_area, buf);
    }
}
