//! Bio form rendering

use super::field_renderer::{draw_field, draw_field_meta};
use crate::app::App;
use crate::state::{BioButton, BioEditForm, BioFormState, FormFocus};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DESCRIPTION: &str = "Write a bio to display publicly on your commenting profile. \
     Must be less than 100 characters.";

/// Draw the bio panel: description, editor, error callout and buttons
pub fn draw_bio_form(frame: &mut Frame, area: Rect, app: &App, form: &BioEditForm) {
    let block = Block::default()
        .title(" Bio ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let snapshot = form.state();
    let has_callout = snapshot.error.is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                                // Description
            Constraint::Min(5),                                   // Editor
            Constraint::Length(1),                                // Validation + counter
            Constraint::Length(if has_callout { 3 } else { 0 }), // Error callout
            Constraint::Length(BUTTON_HEIGHT),                    // Buttons
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(DESCRIPTION, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let field_error = form.display_field_error();
    draw_field(
        frame,
        chunks[1],
        &form.field,
        app.state.focus == FormFocus::Editor,
        field_error.is_some(),
    );
    draw_field_meta(
        frame,
        chunks[2],
        field_error.as_deref(),
        form.remaining_characters(),
    );

    if let Some(error) = &snapshot.error {
        draw_callout(frame, chunks[3], error);
    }

    draw_buttons(frame, chunks[4], app, form, &snapshot);
}

/// Form-level error banner
fn draw_callout(frame: &mut Frame, area: Rect, message: &str) {
    let callout = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(callout, area);
}

fn draw_buttons(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    form: &BioEditForm,
    snapshot: &BioFormState,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12), // Remove
            Constraint::Length(1),
            Constraint::Length(12), // Update
        ])
        .split(area);

    let buttons_focused = app.state.focus == FormFocus::Buttons;
    let update_label = if snapshot.submitting {
        "Saving…"
    } else {
        BioButton::Update.label()
    };

    render_action_button(
        frame,
        chunks[1],
        BioButton::Remove.label(),
        buttons_focused && app.state.selected_button == BioButton::Remove,
        form.can_remove(),
        Some(Color::Red),
    );
    render_action_button(
        frame,
        chunks[3],
        update_label,
        buttons_focused && app.state.selected_button == BioButton::Update,
        form.can_submit(),
        Some(Color::Green),
    );
}

#[cfg(test)]
mod tests {
    use crate::ui::tests::{app_for, render};

    #[test]
    fn test_description_is_shown() {
        let screen = render(&app_for("user-1", true));
        assert!(screen.contains("Write a bio"));
    }

    #[test]
    fn test_empty_field_placeholder_when_unfocused() {
        let mut app = app_for("user-1", true);
        app.state.focus = crate::state::FormFocus::Buttons;
        let screen = render(&app);
        assert!(screen.contains("(empty)"));
        assert!(screen.contains("100"));
    }

    #[test]
    fn test_over_limit_shows_validation_and_negative_count() {
        let mut app = app_for("user-1", true);
        app.state
            .bio
            .form_mut()
            .unwrap()
            .on_change("a".repeat(102));
        let screen = render(&app);
        assert!(screen.contains("-2"));
        assert!(screen.contains("cannot exceed 100"));
    }

    #[test]
    fn test_generic_error_renders_callout() {
        let mut app = app_for("user-1", true);
        let form = app.state.bio.form_mut().unwrap();
        form.on_change("Hi".to_string());
        form.begin_submit().unwrap();
        let _ = form.complete(Err(crate::profile::MutationError::Generic(
            "timeout".to_string(),
        )));
        let screen = render(&app);
        assert!(screen.contains("timeout"));
    }

    #[test]
    fn test_update_button_shows_saving() {
        let mut app = app_for("user-1", true);
        let form = app.state.bio.form_mut().unwrap();
        form.on_change("Hi".to_string());
        form.begin_submit().unwrap();
        let screen = render(&app);
        assert!(screen.contains("SAVING"));
    }
}
