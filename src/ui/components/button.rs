//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a form action button.
///
/// Disabled buttons are drawn dimmed whatever their selection state, so a
/// focused but unusable button still reads as unavailable.
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Option<Color>,
) {
    let accent = accent.unwrap_or(Color::Cyan);

    let border_style = match (is_enabled, is_selected) {
        (false, true) => Style::default().fg(Color::Gray),
        (false, false) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(accent),
        (true, false) => Style::default().fg(Color::DarkGray),
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(label.to_uppercase())
        .alignment(Alignment::Center)
        .style(text_style)
        .block(block);

    frame.render_widget(paragraph, area);
}
