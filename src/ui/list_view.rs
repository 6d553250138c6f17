use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::{capitalize, ListEntry};
use crate::sync::SyncState;
use crate::ui::layout::visible_window;
use crate::ui::theme::{
    category_color, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

/// Body lines for the list screen.
///
/// Entries from the last successful fetch stay visible while a refresh is
/// loading or after it failed; a failure adds a banner above them.
pub fn list_lines(
    state: &SyncState<Vec<ListEntry>>,
    entries: &[ListEntry],
    selection: usize,
    height: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut height = height;

    if let Some(message) = state.error() {
        lines.push(Line::from(Span::styled(
            format!(" Failed to load catalog: {message}"),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
        height = height.saturating_sub(2);
    }

    if entries.is_empty() {
        let placeholder = match state {
            SyncState::Idle => "",
            SyncState::Loading => " Loading...",
            SyncState::Error(_) => " Press r to retry.",
            SyncState::Ready(_) => " No entries.",
        };
        lines.push(Line::from(Span::styled(
            placeholder,
            Style::default().fg(MUTED_TEXT),
        )));
        return lines;
    }

    let name_width = entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    for index in visible_window(selection, entries.len(), height) {
        lines.push(entry_line(&entries[index], index == selection, name_width));
    }
    lines
}

fn entry_line(entry: &ListEntry, selected: bool, name_width: usize) -> Line<'static> {
    let accent = entry
        .primary_category()
        .map(|category| category_color(&category.label))
        .unwrap_or(HEADER_TEXT);

    let mut spans = vec![
        Span::raw(if selected { " ▸ " } else { "   " }),
        Span::styled(
            format!("{:<width$}", capitalize(&entry.name), width = name_width),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (index, category) in entry.categories.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(MUTED_TEXT)));
        }
        spans.push(Span::styled(
            category.label.clone(),
            Style::default().fg(category_color(&category.label)),
        ));
    }

    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}
