//! Application state module

mod app_state;
mod forms;

#[cfg(test)]
pub mod fixtures;

pub use app_state::*;
pub use forms::*;
