use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::{capitalize, Category, ItemDetail};
use crate::sync::SyncState;
use crate::ui::theme::{category_color, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

const BAR_SCALE: u32 = 10;
const BAR_MAX: usize = 25;

/// Body lines for the detail screen.
///
/// `preview` holds the categories passed along by the list screen; they are
/// only shown while the full record is loading.
pub fn detail_lines(
    key: &str,
    state: &SyncState<ItemDetail>,
    preview: &[Category],
) -> Vec<Line<'static>> {
    if key.is_empty() {
        return vec![error_line("No Pokemon selected.")];
    }

    match state {
        SyncState::Loading => {
            let mut lines = vec![info_line("Loading...")];
            if !preview.is_empty() {
                lines.push(Line::from(""));
                lines.push(chip_line(preview));
            }
            lines
        }
        SyncState::Error(message) => vec![error_line(message)],
        SyncState::Idle => vec![info_line("No data available.")],
        SyncState::Ready(detail) => record_lines(detail),
    }
}

fn record_lines(detail: &ItemDetail) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {}", capitalize(&detail.name)),
            text_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  #{}", detail.id), muted),
    ])];

    lines.push(Line::from(""));
    if let Some(url) = &detail.primary_image_url {
        lines.push(Line::from(vec![
            Span::styled(" Image: ", muted),
            Span::styled(url.clone(), text_style),
        ]));
    }
    if let Some(url) = &detail.secondary_image_url {
        lines.push(Line::from(vec![
            Span::styled(" Back:  ", muted),
            Span::styled(url.clone(), text_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!(" Height: {}    Weight: {}", detail.height, detail.weight),
        text_style,
    )));

    if !detail.categories.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("Types"));
        lines.push(chip_line(&detail.categories));
    }

    if !detail.attributes.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("Stats"));
        let label_width = detail
            .attributes
            .iter()
            .map(|a| a.label.chars().count())
            .max()
            .unwrap_or(0);
        let accent = detail
            .primary_category()
            .map(|c| category_color(&c.label))
            .unwrap_or(HEADER_TEXT);
        for attribute in &detail.attributes {
            let bar = (attribute.value / BAR_SCALE) as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", capitalize(&attribute.label), width = label_width),
                    muted,
                ),
                Span::styled(
                    format!(" {:>4} ", attribute.value),
                    text_style.add_modifier(Modifier::BOLD),
                ),
                Span::styled("█".repeat(bar.min(BAR_MAX)), Style::default().fg(accent)),
            ]));
        }
    }

    lines
}

fn chip_line(categories: &[Category]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for category in categories {
        spans.push(Span::styled(
            format!(" {} ", capitalize(&category.label)),
            Style::default()
                .fg(Color::Black)
                .bg(category_color(&category.label)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {title}"),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn info_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" {text}"), Style::default().fg(MUTED_TEXT)))
}

fn error_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" {text}"), Style::default().fg(STATUS_ERROR)))
}
