//! Form field value objects

use super::validation::parse_empty_as_null;

/// Represents a single text field with its configuration and raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field with initial value
    pub fn text_with_value(label: &str, value: String, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            value,
            is_multiline,
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Get the value with empty input treated as absent
    pub fn parsed(&self) -> Option<String> {
        parse_empty_as_null(&self.value)
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Start a new line (ignored for single-line fields)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.clone()
    }
}
