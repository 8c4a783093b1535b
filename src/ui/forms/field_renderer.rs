//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let content = if display_value.is_empty() && !is_active {
        Paragraph::new(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the line under a field: validation message left, remaining
/// character count right
pub fn draw_field_meta(frame: &mut Frame, area: Rect, error: Option<&str>, remaining: isize) {
    let counter = remaining.to_string();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(counter.len() as u16 + 1),
        ])
        .split(area);

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(Color::Red))),
            chunks[0],
        );
    }

    let counter_style = if remaining < 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(counter, counter_style)).alignment(Alignment::Right),
        chunks[1],
    );
}
