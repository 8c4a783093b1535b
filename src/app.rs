//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_action_chord;
use crate::profile::{MutationError, ProfileClient, ProfileClientTrait};
use crate::state::{AppState, BioButton, FormFocus, SubmitError, UpdateBioInput};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcome of a mutation running in the background
pub type MutationOutcome = Result<(), MutationError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded configuration
    pub config: TuiConfig,
    /// Profile service client, shared with mutation tasks
    client: Arc<dyn ProfileClientTrait>,
    outcome_tx: mpsc::UnboundedSender<MutationOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<MutationOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App connected to the configured profile service
    pub async fn new(config: TuiConfig) -> Result<Self> {
        let client = ProfileClient::new(&config)?;
        tracing::info!("Using profile service at {}", client.address());

        let mut app = Self::with_client(config, Arc::new(client));
        app.reload().await;
        Ok(app)
    }

    /// Create an App around an existing client without loading anything
    pub fn with_client(config: TuiConfig, client: Arc<dyn ProfileClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            config,
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn is_submitting(&self) -> bool {
        self.state
            .bio
            .form()
            .is_some_and(|form| form.is_submitting())
    }

    /// Fetch the viewer and settings and remount the bio panel
    pub async fn reload(&mut self) {
        if self.is_submitting() {
            self.state.status_message = Some("Wait for the current save to finish".to_string());
            return;
        }

        let loaded = async {
            let viewer = self.client.fetch_viewer().await?;
            let settings = self.client.fetch_settings().await?;
            anyhow::Ok((viewer, settings))
        }
        .await;

        match loaded {
            Ok((viewer, mut settings)) => {
                if let Some(member_bios) = self.config.member_bios {
                    settings.member_bios = member_bios;
                }
                tracing::info!(
                    viewer = %viewer.id,
                    member_bios = settings.member_bios,
                    "Profile loaded"
                );
                self.state.connected = true;
                self.state.status_message = None;
                self.state.load(viewer, settings);
            }
            Err(err) => {
                tracing::warn!("Failed to load profile: {err:#}");
                self.state.connected = false;
                self.push_error(format!("{err:#}"));
            }
        }
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The error dialog swallows input until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if is_action_chord(&key) {
            match key.code {
                KeyCode::Char('c') => self.quit = true,
                KeyCode::Char('s') => self.dispatch_update(),
                KeyCode::Char('r') => self.dispatch_remove(),
                KeyCode::Char('l') => self.reload().await,
                KeyCode::Char('u') => self.clear_editor(),
                _ => {}
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }

        if !self.state.bio.is_enabled() {
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.state.focus.toggle(),
            _ => match self.state.focus {
                FormFocus::Editor => self.handle_editor_key(key),
                FormFocus::Buttons => self.handle_buttons_key(key),
            },
        }
        Ok(())
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.bio.form_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => form.input_char(c),
            KeyCode::Enter => form.input_newline(),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.state.selected_button.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.selected_button {
                BioButton::Remove => self.dispatch_remove(),
                BioButton::Update => self.dispatch_update(),
            },
            _ => {}
        }
    }

    /// Discard everything typed in the editor
    fn clear_editor(&mut self) {
        if let Some(form) = self.state.bio.form_mut() {
            form.on_change(String::new());
        }
    }

    /// Start saving the edited bio in the background
    fn dispatch_update(&mut self) {
        let Some(form) = self.state.bio.form_mut() else {
            return;
        };
        match form.begin_submit() {
            Ok(input) => {
                tracing::info!(removing = input.bio.is_none(), "Submitting bio");
                self.spawn_mutation(input);
            }
            Err(reason) => self.state.status_message = Some(reason.to_string()),
        }
    }

    /// Start removing the stored bio in the background
    fn dispatch_remove(&mut self) {
        let Some(form) = self.state.bio.form_mut() else {
            return;
        };
        match form.begin_remove() {
            Ok(input) => {
                tracing::info!("Removing bio");
                self.spawn_mutation(input);
            }
            Err(reason) => self.state.status_message = Some(reason.to_string()),
        }
    }

    fn spawn_mutation(&mut self, input: UpdateBioInput) {
        self.state.status_message = Some("Saving…".to_string());
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.update_bio(input).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("Mutation finished after the app shut down");
            }
        });
    }

    /// Apply any mutation outcomes that arrived since the last call
    pub fn poll_mutations(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: MutationOutcome) {
        let Some(form) = self.state.bio.form_mut() else {
            tracing::warn!("Dropping mutation outcome: bio panel is not mounted");
            return;
        };
        let saved_bio_after = match form.complete(outcome) {
            Ok(()) => Some(form.saved_bio().map(str::to_string)),
            Err(SubmitError::Rejected(_)) => None,
            Err(SubmitError::Blocked(reason)) => {
                tracing::warn!("Unexpected mutation outcome: {reason}");
                None
            }
        };

        match saved_bio_after {
            Some(bio) => {
                self.state.status_message = Some(
                    if bio.is_some() {
                        "Bio updated"
                    } else {
                        "Bio removed"
                    }
                    .to_string(),
                );
                if let Some(viewer) = self.state.viewer.as_mut() {
                    viewer.bio = bio;
                }
            }
            None => self.state.status_message = None,
        }
    }
}
