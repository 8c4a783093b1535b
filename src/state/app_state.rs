//! Application state definitions

use super::forms::BioSection;
use std::collections::VecDeque;

/// The signed-in user as seen by the profile tab
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Viewer {
    pub id: String,
    pub username: String,
    pub bio: Option<String>,
}

/// Site settings relevant to the profile tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub member_bios: bool,
}

/// Payload of the bio mutation; `None` removes the bio
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateBioInput {
    pub bio: Option<String>,
}

/// Which part of the bio panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Editor,
    Buttons,
}

impl FormFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            FormFocus::Editor => FormFocus::Buttons,
            FormFocus::Buttons => FormFocus::Editor,
        };
    }
}

/// Buttons shown under the bio editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BioButton {
    Remove,
    #[default]
    Update,
}

impl BioButton {
    pub fn toggle(&mut self) {
        *self = match self {
            BioButton::Remove => BioButton::Update,
            BioButton::Update => BioButton::Remove,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            BioButton::Remove => "Remove",
            BioButton::Update => "Update",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Data
    pub viewer: Option<Viewer>,
    pub connected: bool,

    // Bio panel
    pub bio: BioSection,
    pub focus: FormFocus,
    pub selected_button: BioButton,

    // Feedback
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently shown in the dialog, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Remount the bio panel from freshly loaded data
    pub fn load(&mut self, viewer: Viewer, settings: Settings) {
        self.bio = BioSection::mount(&settings, &viewer);
        self.viewer = Some(viewer);
        self.focus = FormFocus::Editor;
        self.selected_button = BioButton::default();
    }
}
