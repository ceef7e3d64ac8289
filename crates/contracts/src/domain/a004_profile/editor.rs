//! View/edit state of one profile section.
//!
//! The view always renders [`SectionEditor::saved`]; edits go to a draft
//! that is promoted only after the server accepted it. Cancel drops the
//! draft without a request. At most one save per section is in flight.

use thiserror::Error;

use super::sections::ProfileSection;
use crate::domain::common::{ClientError, ClientResult};
use crate::shared::validation::FormErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Viewing,
    Editing,
    Saving,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SectionError {
    #[error("section is not being edited")]
    NotEditing,
    #[error("a save for this section is already in progress")]
    SaveInFlight,
    #[error("please correct the highlighted fields")]
    Invalid(FormErrors),
}

impl From<SectionError> for ClientError {
    fn from(err: SectionError) -> Self {
        match err {
            SectionError::Invalid(errors) => ClientError::Validation(errors),
            SectionError::SaveInFlight => ClientError::InFlight,
            SectionError::NotEditing => ClientError::Validation(FormErrors::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionEditor<T> {
    saved: T,
    draft: Option<T>,
    saving: bool,
}

impl<T: ProfileSection> Default for SectionEditor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: ProfileSection> SectionEditor<T> {
    pub fn new(saved: T) -> Self {
        Self {
            saved,
            draft: None,
            saving: false,
        }
    }

    pub fn phase(&self) -> EditPhase {
        match (&self.draft, self.saving) {
            (None, _) => EditPhase::Viewing,
            (Some(_), false) => EditPhase::Editing,
            (Some(_), true) => EditPhase::Saving,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Last confirmed server state; what the view mode shows
    pub fn saved(&self) -> &T {
        &self.saved
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    /// Draft while editing, otherwise the saved snapshot
    pub fn current(&self) -> &T {
        self.draft.as_ref().unwrap_or(&self.saved)
    }

    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.saved.clone());
        }
    }

    /// Apply a change to the draft. Ignored outside edit mode and while a
    /// save is in flight.
    pub fn edit(&mut self, change: impl FnOnce(&mut T)) -> bool {
        if self.saving {
            return false;
        }
        match self.draft.as_mut() {
            Some(draft) => {
                change(draft);
                true
            }
            None => false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| *d != self.saved)
    }

    pub fn validation(&self) -> FormErrors {
        self.draft
            .as_ref()
            .map(|draft| draft.validate())
            .unwrap_or_default()
    }

    /// Discard the draft; not allowed while the draft is being saved
    pub fn cancel(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.draft = None;
        true
    }

    /// Start a save: returns the draft to send
    pub fn begin_save(&mut self) -> Result<T, SectionError> {
        if self.saving {
            return Err(SectionError::SaveInFlight);
        }
        let draft = self.draft.as_ref().ok_or(SectionError::NotEditing)?;
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(SectionError::Invalid(errors));
        }
        self.saving = true;
        Ok(draft.clone())
    }

    /// Finish a save with the server's answer. Success promotes the draft
    /// and leaves edit mode; failure keeps the draft for another try.
    pub fn finish_save(&mut self, outcome: ClientResult<()>) -> ClientResult<()> {
        self.saving = false;
        match outcome {
            Ok(()) => {
                if let Some(draft) = self.draft.take() {
                    self.saved = draft;
                }
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Server state changed underneath (e.g. after a user refresh); the draft
    /// is left alone.
    pub fn replace_saved(&mut self, saved: T) {
        self.saved = saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_profile::{AboutSection, AvailabilitySection, Day, TimeSlot};

    fn about(text: &str) -> AboutSection {
        AboutSection {
            about_me: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_cancel_keeps_saved_value() {
        let mut editor = SectionEditor::new(about("original"));
        editor.begin_edit();
        editor.edit(|d| d.about_me = Some("changed".into()));
        assert_eq!(editor.saved().about_me.as_deref(), Some("original"));
        assert!(editor.cancel());
        assert_eq!(editor.phase(), EditPhase::Viewing);
        assert_eq!(editor.saved().about_me.as_deref(), Some("original"));
        assert_eq!(editor.current().about_me.as_deref(), Some("original"));
    }

    #[test]
    fn test_failed_save_keeps_draft_and_edit_mode() {
        let mut editor = SectionEditor::new(about("original"));
        editor.begin_edit();
        editor.edit(|d| d.about_me = Some("typed".into()));
        let sent = editor.begin_save().unwrap();
        assert_eq!(sent.about_me.as_deref(), Some("typed"));
        assert_eq!(editor.phase(), EditPhase::Saving);

        let err = editor
            .finish_save(Err(ClientError::api(500, "Server error")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Server error");
        assert_eq!(editor.phase(), EditPhase::Editing);
        assert_eq!(editor.draft().unwrap().about_me.as_deref(), Some("typed"));
        assert_eq!(editor.saved().about_me.as_deref(), Some("original"));
    }

    #[test]
    fn test_successful_save_promotes_draft() {
        let mut editor = SectionEditor::new(about("original"));
        editor.begin_edit();
        editor.edit(|d| d.about_me = Some("typed".into()));
        editor.begin_save().unwrap();
        editor.finish_save(Ok(())).unwrap();
        assert_eq!(editor.phase(), EditPhase::Viewing);
        assert_eq!(editor.saved().about_me.as_deref(), Some("typed"));
    }

    #[test]
    fn test_view_shows_saved_while_editing() {
        let mut editor = SectionEditor::new(about("original"));
        editor.begin_edit();
        editor.edit(|d| d.about_me = Some("draft".into()));
        assert!(editor.is_dirty());
        assert_eq!(editor.saved().about_me.as_deref(), Some("original"));
        assert_eq!(editor.current().about_me.as_deref(), Some("draft"));
    }

    #[test]
    fn test_second_save_rejected_while_in_flight() {
        let mut editor = SectionEditor::new(about("a"));
        editor.begin_edit();
        editor.begin_save().unwrap();
        assert_eq!(editor.begin_save().unwrap_err(), SectionError::SaveInFlight);
        assert!(!editor.edit(|d| d.about_me = None));
        assert!(!editor.cancel());
    }

    #[test]
    fn test_save_requires_edit_mode() {
        let mut editor = SectionEditor::new(about("a"));
        assert_eq!(editor.begin_save().unwrap_err(), SectionError::NotEditing);
        assert!(!editor.edit(|d| d.about_me = None));
    }

    #[test]
    fn test_invalid_draft_is_not_sent() {
        let mut editor = SectionEditor::new(about("a"));
        editor.begin_edit();
        editor.edit(|d| d.about_me = Some("x".repeat(5000)));
        assert!(matches!(editor.begin_save(), Err(SectionError::Invalid(_))));
        assert!(!editor.is_saving());
    }

    #[test]
    fn test_schedule_toggle_through_editor() {
        let mut editor = SectionEditor::<AvailabilitySection>::default();
        editor.begin_edit();
        editor.edit(|d| d.weekly_schedule.toggle(TimeSlot::Morning, Day::Tue));
        editor.edit(|d| d.weekly_schedule.toggle(TimeSlot::Morning, Day::Tue));
        assert!(!editor.is_dirty());
    }
}
