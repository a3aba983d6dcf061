use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget};
use serde_json::Value;

use crate::tables::{Record, ResourceKind};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT};

/// Key holding the transaction hashes of a block row.
pub const BLOCK_TX_KEY: &str = "txhash";
/// Key holding the hash of a transaction-list row.
pub const TRANSACTION_TX_KEY: &str = "txhash";

/// A table column bound to a record field.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub key: &'static str,
    pub width: Constraint,
}

const fn column(title: &'static str, key: &'static str, width: Constraint) -> Column {
    Column { title, key, width }
}

const BLOCK_COLUMNS: &[Column] = &[
    column("Block", "blocknum", Constraint::Length(8)),
    column("Txs", "txcount", Constraint::Length(5)),
    column("Data Hash", "datahash", Constraint::Fill(1)),
    column("Block Hash", "blockhash", Constraint::Fill(1)),
    column("Previous Hash", "prehash", Constraint::Fill(1)),
    column("Created", "createdt", Constraint::Length(26)),
];

const TRANSACTION_COLUMNS: &[Column] = &[
    column("Creator", "creator_msp_id", Constraint::Length(14)),
    column("Tx Id", TRANSACTION_TX_KEY, Constraint::Fill(2)),
    column("Type", "type", Constraint::Length(18)),
    column("Chaincode", "chaincodename", Constraint::Fill(1)),
    column("Created", "createdt", Constraint::Length(26)),
];

const PEER_COLUMNS: &[Column] = &[
    column("Peer", "server_hostname", Constraint::Fill(2)),
    column("Requests", "requests", Constraint::Fill(2)),
    column("Type", "peer_type", Constraint::Length(10)),
    column("MSP Id", "mspid", Constraint::Fill(1)),
    column("Height", "ledger_height_low", Constraint::Length(8)),
];

const CHAINCODE_COLUMNS: &[Column] = &[
    column("Chaincode", "chaincodename", Constraint::Fill(1)),
    column("Channel", "channelName", Constraint::Fill(1)),
    column("Path", "path", Constraint::Fill(2)),
    column("Version", "version", Constraint::Length(10)),
    column("Txs", "txCount", Constraint::Length(8)),
];

const CHANNEL_COLUMNS: &[Column] = &[
    column("Channel", "channelname", Constraint::Fill(1)),
    column("Blocks", "blocks", Constraint::Length(8)),
    column("Txs", "transactions", Constraint::Length(8)),
    column("Created", "createdat", Constraint::Length(26)),
    column("Genesis Hash", "channel_genesis_hash", Constraint::Fill(2)),
];

/// Column layout for a listing. `Transaction` is a single record, not a list.
pub fn columns_for(kind: ResourceKind) -> &'static [Column] {
    match kind {
        ResourceKind::BlockList => BLOCK_COLUMNS,
        ResourceKind::TransactionList => TRANSACTION_COLUMNS,
        ResourceKind::PeerList => PEER_COLUMNS,
        ResourceKind::ChaincodeList => CHAINCODE_COLUMNS,
        ResourceKind::Channels => CHANNEL_COLUMNS,
        ResourceKind::Transaction => &[],
    }
}

/// Render one field of a record as display text.
pub fn cell_text(record: &Record, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

/// Key/value lines describing a single transaction record.
pub fn transaction_lines(transaction: &Record) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(ACCENT);
    let value_style = Style::default().fg(HEADER_TEXT);

    match transaction {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Line::from(vec![
                    Span::styled(format!("{key}: "), key_style),
                    Span::styled(text, value_style),
                ])
            })
            .collect(),
        other => vec![Line::from(Span::styled(other.to_string(), value_style))],
    }
}

/// Generic table over a listing, driven by a column spec.
pub struct RecordTable<'a> {
    rows: Option<&'a [Record]>,
    columns: &'a [Column],
}

impl<'a> RecordTable<'a> {
    pub fn new(rows: Option<&'a [Record]>, columns: &'a [Column]) -> Self {
        Self { rows, columns }
    }

    pub(crate) fn table(rows: &'a [Record], columns: &'a [Column]) -> Table<'a> {
        let header = Row::new(columns.iter().map(|c| Cell::from(c.title)))
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        let body = rows.iter().map(|record| {
            Row::new(
                columns
                    .iter()
                    .map(|c| Cell::from(cell_text(record, c.key))),
            )
        });

        Table::new(body, columns.iter().map(|c| c.width))
            .header(header)
            .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("> ")
    }
}

impl StatefulWidget for RecordTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        match self.rows {
            None => Paragraph::new("Loading...").render(area, buf),
            Some([]) => Paragraph::new("No records.").render(area, buf),
            Some(rows) => StatefulWidget::render(Self::table(rows, self.columns), area, buf, state),
        }
    }
}
