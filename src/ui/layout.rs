use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, tab bar, body and footer, top to bottom.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let tabs_height = 1.min(area.height.saturating_sub(header_height + footer_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let tabs = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: tabs_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + tabs_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + tabs_height + footer_height),
    };
    (header, tabs, body, footer)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let area = Rect::new(0, 0, 100, 40);
        let (header, tabs, body, footer) = layout_regions(area);
        assert_eq!(header.height + tabs.height + body.height + footer.height, 40);
        assert_eq!(body.y, 4);
        assert_eq!(footer.y, 37);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (_, _, body, _) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(body.height, 0);
    }
}
