use crate::catalog::capitalize;
use crate::sync::SyncState;
use crate::ui::app::{App, Screen};
use crate::ui::detail_view::detail_lines;
use crate::ui::footer::{Footer, DETAIL_HINTS, LIST_HINTS};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list_view::list_lines;
use crate::ui::theme::{STATUS_ERROR, STATUS_LOADING, STATUS_OK};
use ratatui::style::Color;
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::List => {
            let state = app.list_state();
            let entries = app.entries();
            let status = match &state {
                SyncState::Ready(_) => Some((format!("{} entries", entries.len()), STATUS_OK)),
                other => sync_status(other),
            };
            let mut header_widget = Header::new("Catalog");
            if let Some((label, color)) = status {
                header_widget = header_widget.status(label, color);
            }
            frame.render_widget(header_widget.widget(), header);

            let lines = list_lines(&state, &entries, app.selection(), body.height as usize);
            frame.render_widget(Paragraph::new(lines), body);
            frame.render_widget(Footer::new(LIST_HINTS).widget(footer), footer);
        }
        Screen::Detail => {
            let key = app.detail_key();
            let state = app.detail_state();
            let title = if key.is_empty() {
                "Detail".to_string()
            } else {
                capitalize(&key)
            };
            let mut header_widget = Header::new(&title);
            if let Some((label, color)) = sync_status(&state) {
                header_widget = header_widget.status(label, color);
            }
            frame.render_widget(header_widget.widget(), header);

            let preview = app.route().map(|route| route.categories()).unwrap_or_default();
            let lines = detail_lines(&key, &state, &preview);
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
            frame.render_widget(Footer::new(DETAIL_HINTS).widget(footer), footer);
        }
    }
}

fn sync_status<T>(state: &SyncState<T>) -> Option<(String, Color)> {
    match state {
        SyncState::Idle => None,
        SyncState::Loading => Some(("Loading...".to_string(), STATUS_LOADING)),
        SyncState::Error(_) => Some(("Error".to_string(), STATUS_ERROR)),
        SyncState::Ready(_) => Some(("Ready".to_string(), STATUS_OK)),
    }
}
