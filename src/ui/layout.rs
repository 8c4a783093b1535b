//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{RELOAD_SHORTCUT, REMOVE_SHORTCUT, SAVE_SHORTCUT};
use crate::state::FormFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and content, reserving the bottom line for
/// the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with the signed-in user
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Profile ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(viewer) = &app.state.viewer {
        spans.push(Span::styled(
            format!("· {}", viewer.username),
            Style::default().fg(Color::White),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the current focus
fn get_hints(app: &App) -> String {
    if !app.state.bio.is_enabled() {
        return format!("Member bios are disabled | {RELOAD_SHORTCUT}: reload | Esc: quit");
    }
    match app.state.focus {
        FormFocus::Editor => format!(
            "Tab: buttons | {SAVE_SHORTCUT}: update | {REMOVE_SHORTCUT}: remove | Esc: quit"
        ),
        FormFocus::Buttons => "←/→: select | Enter: press | Tab: editor | Esc: quit".to_string(),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(message) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
