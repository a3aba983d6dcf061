use crate::ui::nav::{NavState, Tab};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for whatever the user is looking at, plus the row position.
pub struct Footer {
    tab: Tab,
    detail: bool,
    selected: usize,
    rows: usize,
}

impl Footer {
    pub fn new(nav: &NavState, rows: usize) -> Self {
        Self {
            tab: nav.tab,
            detail: nav.detail,
            selected: nav.selected,
            rows,
        }
    }

    pub fn hints(&self) -> &'static str {
        if self.detail {
            return " Esc: Close │ y: Copy tx │ q: Quit";
        }
        match self.tab {
            Tab::Blocks | Tab::Transactions => {
                " Tab: Switch │ Enter: Open tx │ y: Copy tx │ c: Channel │ r: Refresh │ q: Quit"
            }
            Tab::Peers | Tab::Chaincodes | Tab::Channels => {
                " Tab: Switch │ j/k: Move │ c: Channel │ r: Refresh │ Ctrl+R: Reload config │ q: Quit"
            }
        }
    }

    /// `3/20 Blocks`, or just the tab title while the listing is empty.
    pub fn position(&self) -> String {
        if self.rows == 0 {
            self.tab.title().to_string()
        } else {
            format!("{}/{} {}", self.selected + 1, self.rows, self.tab.title())
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let position = format!("{}  v{} ", self.position(), VERSION);

        // Char count, not bytes: the separators are multi-byte.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(position.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(position, Style::default().fg(ACCENT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
