//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `bio_form`: Profile bio panel

mod bio_form;
mod field_renderer;

pub use bio_form::draw_bio_form;
