//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // The bio panel renders nothing when member bios are off
    if let Some(form) = app.state.bio.form() {
        forms::draw_bio_form(frame, main_area, app, form);
    }

    layout::draw_status_bar(frame, app);

    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::profile::MockProfileClientTrait;
    use crate::state::fixtures;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    pub(super) fn app_for(user: &str, member_bios: bool) -> App {
        let mut app = App::with_client(
            TuiConfig::default(),
            Arc::new(MockProfileClientTrait::new()),
        );
        app.state.connected = true;
        app.state
            .load(fixtures::viewer(user), fixtures::settings(member_bios));
        app
    }

    pub(super) fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_enabled_panel_renders_form() {
        let app = app_for("user-0", true);
        let screen = render(&app);
        assert!(screen.contains("Bio"));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("REMOVE"));
        assert!(screen.contains("UPDATE"));
        assert!(screen.contains("95"));
    }

    #[test]
    fn test_disabled_panel_renders_nothing() {
        let app = app_for("user-0", false);
        let screen = render(&app);
        assert!(!screen.contains("Hello"));
        assert!(!screen.contains("REMOVE"));
        assert!(screen.contains("Member bios are disabled"));
    }

    #[test]
    fn test_error_dialog_overlays() {
        let mut app = app_for("user-0", true);
        app.push_error("connection refused");
        let screen = render(&app);
        assert!(screen.contains("connection refused"));
    }
}
