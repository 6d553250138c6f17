use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::List => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
            KeyCode::PageUp => app.move_selection(-10),
            KeyCode::PageDown => app.move_selection(10),
            KeyCode::Enter => {
                app.open_selected();
            }
            KeyCode::Char('r') => {
                app.refresh_list();
            }
            _ => {}
        },
        Screen::Detail => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')
            ) {
                app.back();
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
