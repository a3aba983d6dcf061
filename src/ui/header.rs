use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PENDING};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    base_url: &'a str,
    channel: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(base_url: &'a str, channel: Option<&'a str>) -> Self {
        Self { base_url, channel }
    }

    /// `loaded` is true once the active tab's listing has been fetched.
    pub fn widget(&self, loaded: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, marker_style) = if loaded {
            ("●", Style::default().fg(STATUS_OK))
        } else {
            ("○", Style::default().fg(STATUS_PENDING))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(marker, marker_style),
            Span::styled("  Explorer", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("channel: {}", self.channel.unwrap_or("-")),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
