use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: app name, screen title and a status indicator.
pub struct Header<'a> {
    title: &'a str,
    status: Option<(String, Color)>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            status: None,
        }
    }

    pub fn status(mut self, label: impl Into<String>, color: Color) -> Self {
        self.status = Some((label.into(), color));
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Pokedex",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.title.to_string(), text_style),
        ];
        if let Some((label, color)) = &self.status {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(label.clone(), Style::default().fg(*color)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
