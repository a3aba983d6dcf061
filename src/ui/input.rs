use crate::ui::app::App;
use crate::ui::nav::{NavIntent, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    if app.nav().detail {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dispatch_nav(NavIntent::CloseDetail);
            return;
        }
        if !matches!(key.code, KeyCode::Char('q') | KeyCode::Char('y')) {
            return;
        }
    }

    let len = app.rows_len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::Right => app.dispatch_nav(NavIntent::NextTab),
        KeyCode::BackTab | KeyCode::Left => app.dispatch_nav(NavIntent::PrevTab),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_nav(NavIntent::MoveUp { len }),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_nav(NavIntent::MoveDown { len }),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('y') => app.copy_tx_hash(),
        KeyCode::Char('c') => app.cycle_channel(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char(ch) => {
            if let Some(tab) = tab_for_digit(ch) {
                app.dispatch_nav(NavIntent::SelectTab(tab));
            }
        }
        _ => {}
    }
}

fn tab_for_digit(ch: char) -> Option<Tab> {
    let index = ch.to_digit(10)? as usize;
    index.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_tabs() {
        assert_eq!(tab_for_digit('1'), Some(Tab::Blocks));
        assert_eq!(tab_for_digit('5'), Some(Tab::Channels));
        assert_eq!(tab_for_digit('0'), None);
        assert_eq!(tab_for_digit('9'), None);
        assert_eq!(tab_for_digit('x'), None);
    }

    #[test]
    fn ctrl_detection_ignores_shift() {
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        let ctrl_shift_r = KeyEvent::new(
            KeyCode::Char('R'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert!(is_ctrl_char(ctrl_r, 'r'));
        assert!(!is_ctrl_char(ctrl_shift_r, 'r'));
        assert!(!is_ctrl_char(KeyEvent::from(KeyCode::Char('r')), 'r'));
    }
}
