//! Trait abstraction for the profile service to enable mocking in tests

use super::error::MutationError;
use crate::state::{Settings, UpdateBioInput, Viewer};
use anyhow::Result;
use async_trait::async_trait;

/// Operations against the profile service.
///
/// Implementations are shared with background tasks, so every method takes
/// `&self`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileClientTrait: Send + Sync {
    /// Fetch the signed-in user
    async fn fetch_viewer(&self) -> Result<Viewer>;

    /// Fetch the site settings relevant to the profile tab
    async fn fetch_settings(&self) -> Result<Settings>;

    /// Replace the viewer's bio; `None` removes it
    async fn update_bio(&self, input: UpdateBioInput) -> Result<(), MutationError>;
}
