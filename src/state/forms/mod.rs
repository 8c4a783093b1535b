//! Form domain layer
//!
//! Type-safe form handling for the profile bio panel.

mod bio_form;
mod field;
mod validation;

pub use bio_form::{BioEditForm, BioFormState, BioSection, SubmitError};
pub use field::FormField;
pub use validation::parse_empty_as_null;
