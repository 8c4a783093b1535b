//! Bio edit form: local validation, the single in-flight submit guard and
//! mapping of mutation outcomes back into form state.

use super::field::FormField;
use super::validation::{
    parse_empty_as_null, remaining_characters, validate_max_length, ValidationError,
    MAX_BIO_LENGTH,
};
use crate::profile::MutationError;
#[cfg(test)]
use crate::profile::ProfileClientTrait;
use crate::state::{Settings, UpdateBioInput, Viewer};
use thiserror::Error;

/// Field name used by the service when reporting invalid arguments
pub const BIO_FIELD: &str = "bio";

/// Snapshot of the form as the view sees it.
///
/// `value` is normalized: empty or whitespace-only text reads as `None`. The
/// raw text being edited is available through [`BioEditForm::field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioFormState {
    pub value: Option<String>,
    pub pristine: bool,
    pub submitting: bool,
    pub error: Option<String>,
    pub field_error: Option<String>,
}

/// Why a submit or remove request was ignored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("A change is already being saved")]
    AlreadySubmitting,
    #[error("Nothing to save")]
    Pristine,
    #[error("{0}")]
    Invalid(ValidationError),
    #[error("There is no bio to remove")]
    NoBio,
    #[error("No change is being saved")]
    NotSubmitting,
}

/// Result of a submit or remove attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The guard refused the request; form state is unchanged
    #[error(transparent)]
    Blocked(#[from] SubmitBlocked),
    /// The service refused the mutation; the failure is recorded in the form
    #[error(transparent)]
    Rejected(#[from] MutationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Update,
    Remove,
}

#[derive(Debug, Clone)]
struct Pending {
    intent: Intent,
    input: UpdateBioInput,
}

/// Form mediating between bio edits and the update mutation
#[derive(Debug, Clone)]
pub struct BioEditForm {
    pub field: FormField,
    /// Last value known to be stored remotely
    saved_bio: Option<String>,
    max_length: usize,
    pristine: bool,
    pending: Option<Pending>,
    error: Option<String>,
    field_error: Option<String>,
}

impl BioEditForm {
    /// Create the form from the viewer's stored bio
    pub fn initialize(current_bio: Option<String>) -> Self {
        let saved_bio = current_bio.as_deref().and_then(parse_empty_as_null);
        Self {
            field: FormField::text_with_value("Bio", saved_bio.clone().unwrap_or_default(), true),
            saved_bio,
            max_length: MAX_BIO_LENGTH,
            pristine: true,
            pending: None,
            error: None,
            field_error: None,
        }
    }

    pub fn state(&self) -> BioFormState {
        BioFormState {
            value: self.field.parsed(),
            pristine: self.pristine,
            submitting: self.is_submitting(),
            error: self.error.clone(),
            field_error: self.field_error.clone(),
        }
    }

    pub fn saved_bio(&self) -> Option<&str> {
        self.saved_bio.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the raw field value
    pub fn on_change(&mut self, new_value: String) {
        self.field.set_text(new_value);
        self.after_edit();
    }

    pub fn input_char(&mut self, c: char) {
        self.field.push_char(c);
        self.after_edit();
    }

    pub fn input_newline(&mut self) {
        self.field.push_newline();
        self.after_edit();
    }

    pub fn backspace(&mut self) {
        self.field.pop_char();
        self.after_edit();
    }

    fn after_edit(&mut self) {
        self.pristine = self.field.parsed() == self.saved_bio;
        self.field_error = None;
    }

    /// Local validation of the current value
    pub fn validate(&self) -> Option<ValidationError> {
        validate_max_length(self.max_length)(Some(self.field.as_text()))
    }

    /// Message to show next to the field; local errors take precedence
    pub fn display_field_error(&self) -> Option<String> {
        self.validate()
            .map(|err| err.to_string())
            .or_else(|| self.field_error.clone())
    }

    pub fn remaining_characters(&self) -> isize {
        remaining_characters(self.max_length, Some(self.field.as_text()))
    }

    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    pub fn can_remove(&self) -> bool {
        self.check_remove().is_ok()
    }

    fn check_submit(&self) -> Result<(), SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        if self.pristine {
            return Err(SubmitBlocked::Pristine);
        }
        if let Some(err) = self.validate() {
            return Err(SubmitBlocked::Invalid(err));
        }
        Ok(())
    }

    fn check_remove(&self) -> Result<(), SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        if self.saved_bio.is_none() {
            return Err(SubmitBlocked::NoBio);
        }
        Ok(())
    }

    /// Claim the in-flight slot for an update and return the payload to send
    pub fn begin_submit(&mut self) -> Result<UpdateBioInput, SubmitBlocked> {
        self.check_submit().inspect_err(|reason| {
            tracing::debug!("Bio submit ignored: {reason}");
        })?;
        let input = UpdateBioInput {
            bio: self.field.parsed(),
        };
        Ok(self.start(Intent::Update, input))
    }

    /// Claim the in-flight slot for removing the stored bio
    pub fn begin_remove(&mut self) -> Result<UpdateBioInput, SubmitBlocked> {
        self.check_remove().inspect_err(|reason| {
            tracing::debug!("Bio removal ignored: {reason}");
        })?;
        Ok(self.start(Intent::Remove, UpdateBioInput { bio: None }))
    }

    fn start(&mut self, intent: Intent, input: UpdateBioInput) -> UpdateBioInput {
        self.error = None;
        self.pending = Some(Pending {
            intent,
            input: input.clone(),
        });
        input
    }

    /// Apply the outcome of the mutation started by `begin_submit` or
    /// `begin_remove`
    pub fn complete(&mut self, outcome: Result<(), MutationError>) -> Result<(), SubmitError> {
        let pending = self.pending.take().ok_or(SubmitBlocked::NotSubmitting)?;

        match outcome {
            Ok(()) => {
                match pending.intent {
                    Intent::Update => {
                        // Reset to what the service stored; keystrokes typed
                        // while saving are discarded
                        self.field
                            .set_text(pending.input.bio.clone().unwrap_or_default());
                        self.saved_bio = pending.input.bio;
                        self.pristine = true;
                    }
                    Intent::Remove => {
                        self.saved_bio = None;
                        self.field.clear();
                        self.pristine = true;
                    }
                }
                self.field_error = None;
                tracing::info!(intent = ?pending.intent, "Bio saved");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(intent = ?pending.intent, "Bio mutation failed: {err}");
                match &err {
                    MutationError::InvalidArgs(args) => {
                        for (field, message) in args {
                            if field == BIO_FIELD {
                                self.field_error = Some(message.clone());
                            } else {
                                tracing::warn!("Dropping error for unknown field {field}: {message}");
                            }
                        }
                    }
                    MutationError::Generic(message) => {
                        self.error = Some(message.clone());
                    }
                }
                Err(SubmitError::Rejected(err))
            }
        }
    }

    /// Validate, send the current value and record the outcome
    #[cfg(test)]
    pub async fn submit<C>(&mut self, client: &C) -> Result<(), SubmitError>
    where
        C: ProfileClientTrait + ?Sized,
    {
        let input = self.begin_submit()?;
        let outcome = client.update_bio(input).await;
        self.complete(outcome)
    }

    /// Remove the stored bio, discarding any unsaved edits
    #[cfg(test)]
    pub async fn remove_bio<C>(&mut self, client: &C) -> Result<(), SubmitError>
    where
        C: ProfileClientTrait + ?Sized,
    {
        let input = self.begin_remove()?;
        let outcome = client.update_bio(input).await;
        self.complete(outcome)
    }
}

/// The bio panel, present only when member bios are enabled
#[derive(Debug, Clone, Default)]
pub enum BioSection {
    #[default]
    Disabled,
    Enabled(BioEditForm),
}

impl BioSection {
    pub fn mount(settings: &Settings, viewer: &Viewer) -> Self {
        if settings.member_bios {
            BioSection::Enabled(BioEditForm::initialize(viewer.bio.clone()))
        } else {
            BioSection::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, BioSection::Enabled(_))
    }

    pub fn form(&self) -> Option<&BioEditForm> {
        match self {
            BioSection::Enabled(form) => Some(form),
            BioSection::Disabled => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut BioEditForm> {
        match self {
            BioSection::Enabled(form) => Some(form),
            BioSection::Disabled => None,
        }
    }
}
