use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LIST_HINTS: &str = " ↑/↓: Move │ Enter: Details │ r: Refresh │ q: Quit";
pub const DETAIL_HINTS: &str = " Esc: Back │ q: Quit";

/// Key hints on the left, version on the right.
pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn new(hints: &'static str) -> Self {
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Padding by char count, not byte count (hints contain arrows)
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
