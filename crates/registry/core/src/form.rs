//! Form session: the draft being edited and the create/edit state machine.

use crate::draft::Draft;
use crate::fields::Field;
use crate::record::{RecordId, Registration};
use crate::store::{RegistrationStore, StoreError};

/// Whether a submit will create a new record or replace an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submit creates a new registration.
    #[default]
    Creating,
    /// Submit replaces the registration with this id.
    Editing(RecordId),
}

/// What a successful submit did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Registration),
    Updated(Registration),
}

/// The form controller: one in-progress draft plus the mode it commits under.
///
/// The session never owns a store; the store is passed into the operations
/// that need one, so any store instance (or a test double built on one) can
/// sit behind the same session.
#[derive(Clone, Debug, Default)]
pub struct FormSession {
    draft: Draft,
    mode: FormMode,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Replaces one field's text with the given full value.
    ///
    /// Allowed in both modes and never changes the mode.
    pub fn change_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_value(field, value);
    }

    /// Replaces the whole draft, keeping the mode. Used by sample fills.
    pub fn replace_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Loads the record with `id` into the draft and enters editing mode.
    ///
    /// On [`StoreError::NotFound`] nothing changes: no transition and the
    /// draft keeps whatever was typed so far.
    pub fn start_edit(
        &mut self,
        store: &RegistrationStore,
        id: RecordId,
    ) -> Result<(), StoreError> {
        let record = store.get(id).ok_or(StoreError::NotFound(id))?;
        self.draft = Draft::from_record(record);
        self.mode = FormMode::Editing(id);
        Ok(())
    }

    /// Abandons an in-progress edit, resetting the draft. Does nothing while
    /// creating, so half-typed new registrations survive a stray cancel.
    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.reset();
        }
    }

    /// Commits the draft: create while creating, replace-by-id while editing.
    ///
    /// The draft resets and the mode returns to `Creating` in every case,
    /// including a failed update (the target may have been deleted since the
    /// edit began); the error still propagates so the caller can report it.
    pub fn submit(
        &mut self,
        store: &mut RegistrationStore,
    ) -> Result<SubmitOutcome, StoreError> {
        let profile = self.draft.to_profile();
        let result = match self.mode {
            FormMode::Creating => Ok(SubmitOutcome::Created(store.create(profile))),
            FormMode::Editing(id) => {
                let record = Registration::new(id, profile);
                store
                    .update(record.clone())
                    .map(|()| SubmitOutcome::Updated(record))
            }
        };
        self.reset();
        result
    }

    fn reset(&mut self) {
        self.draft = Draft::new();
        self.mode = FormMode::Creating;
    }
}
