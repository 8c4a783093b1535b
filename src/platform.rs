//! Platform-specific configuration

use crossterm::event::{KeyEvent, KeyModifiers};

/// Secondary modifier accepted for form shortcuts
/// - macOS: SUPER (Cmd key), for terminals that forward it
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Remove shortcut display
pub const REMOVE_SHORTCUT: &str = "Ctrl+R";

/// Reload shortcut display
pub const RELOAD_SHORTCUT: &str = "Ctrl+L";

/// True when the key carries Ctrl or the platform action modifier
pub fn is_action_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(ACTION_MODIFIER)
}
