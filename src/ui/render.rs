use crate::tables::selectors::{current_channel_selector, rows_selector, transaction_selector};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::lists::{columns_for, transaction_lines, RecordTable};
use crate::ui::nav::Tab;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER};
use crate::ui::view::BlocksView;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, TableState, Tabs, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, tabs, body, footer) = layout_regions(area);
    let state = app.store().snapshot();
    let nav = app.nav();

    let header_widget = Header::new(app.base_url(), current_channel_selector(&state));
    frame.render_widget(header_widget.widget(app.is_loaded(&state)), header);

    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())));
    frame.render_widget(
        Tabs::new(titles)
            .select(nav.tab.index())
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .highlight_style(
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        tabs,
    );

    frame.render_widget(Clear, body);
    let mut table_state = TableState::default().with_selected(Some(nav.selected));
    match nav.tab {
        Tab::Blocks => {
            let get_transaction = |channel: &str, tx_id: &str| app.get_transaction(channel, tx_id);
            let view = BlocksView::new(app.blocks_props(&state, &get_transaction));
            frame.render_stateful_widget(view, body, &mut table_state);
        }
        tab => {
            let kind = tab.resource();
            let card = Block::default()
                .title(Span::styled(
                    format!(" {} ", tab.title()),
                    Style::default().fg(ACCENT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER));
            let inner = card.inner(body);
            frame.render_widget(card, body);
            frame.render_stateful_widget(
                RecordTable::new(rows_selector(&state, kind), columns_for(kind)),
                inner,
                &mut table_state,
            );
        }
    }

    let rows = rows_selector(&state, nav.tab.resource()).map_or(0, <[_]>::len);
    frame.render_widget(Footer::new(nav, rows).widget(footer), footer);

    // The blocks tab shows the transaction inline; elsewhere it is a popup.
    if nav.detail && nav.tab != Tab::Blocks {
        let popup = centered_rect(70, 60, area);
        let lines = match transaction_selector(&state) {
            Some(transaction) => transaction_lines(transaction),
            None => vec![Line::from("Loading...")],
        };
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .title(" Transaction ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
    }
}
