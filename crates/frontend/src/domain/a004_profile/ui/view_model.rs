use contracts::domain::a004_profile::{EditPhase, ProfileSection, SectionEditor, SectionError};
use contracts::shared::validation::FormErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionStore;

/// ViewModel for one profile section
pub struct SectionViewModel<T>
where
    T: ProfileSection + Send + Sync + 'static,
{
    pub editor: RwSignal<SectionEditor<T>>,
    /// Errors of the last rejected save, kept in sync while editing
    pub errors: RwSignal<FormErrors>,
}

impl<T> Clone for SectionViewModel<T>
where
    T: ProfileSection + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SectionViewModel<T> where T: ProfileSection + Send + Sync + 'static {}

impl<T> SectionViewModel<T>
where
    T: ProfileSection + Send + Sync + 'static,
{
    /// Editor seeded from the session; follows later session updates
    pub fn new(session: SessionStore) -> Self {
        let saved = session
            .login_data_untracked()
            .map(|data| T::from_login(&data))
            .unwrap_or_default();
        let editor = RwSignal::new(SectionEditor::new(saved));

        Effect::new(move |_| {
            if let Some(data) = session.login_data() {
                editor.update(|e| e.replace_saved(T::from_login(&data)));
            }
        });

        Self {
            editor,
            errors: RwSignal::new(FormErrors::new()),
        }
    }

    pub fn phase(&self) -> EditPhase {
        self.editor.with(SectionEditor::phase)
    }

    /// Saved snapshot; the only thing view mode renders
    pub fn saved<U>(&self, read: impl FnOnce(&T) -> U) -> U {
        self.editor.with(|e| read(e.saved()))
    }

    /// Draft while editing, saved snapshot otherwise
    pub fn current<U>(&self, read: impl FnOnce(&T) -> U) -> U {
        self.editor.with(|e| read(e.current()))
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn begin_edit(&self) {
        self.errors.set(FormErrors::new());
        self.editor.update(SectionEditor::begin_edit);
    }

    pub fn edit(&self, change: impl FnOnce(&mut T)) {
        self.editor.update(|e| {
            e.edit(change);
        });
        if !self.errors.with_untracked(FormErrors::is_empty) {
            self.errors.set(self.editor.with_untracked(SectionEditor::validation));
        }
    }

    pub fn cancel(&self) {
        let cancelled = self.editor.try_update(SectionEditor::cancel).unwrap_or(false);
        if cancelled {
            self.errors.set(FormErrors::new());
        }
    }

    pub fn save_command(&self, session: SessionStore, toasts: ToastService) {
        let Some(user) = session.user_untracked() else {
            toasts.error("Please sign in to continue");
            return;
        };

        let draft = match self.editor.try_update(SectionEditor::begin_save) {
            Some(Ok(draft)) => draft,
            Some(Err(SectionError::Invalid(errors))) => {
                self.errors.set(errors);
                return;
            }
            Some(Err(e)) => {
                log::debug!("{} save ignored: {}", T::KIND.title(), e);
                return;
            }
            None => return,
        };
        self.errors.set(FormErrors::new());
        log::info!("Saving {} section", T::KIND.title());

        let editor = self.editor;
        spawn_local(async move {
            let result = model::save_section(session, user.role, &user.id, &draft).await;
            match editor.try_update(|e| e.finish_save(result)) {
                Some(Ok(())) => {
                    log::info!("{} section saved", T::KIND.title());
                    toasts.success(format!("{} updated", T::KIND.title()));
                    session.update_login_data(|data| draft.apply_to(data));
                    match model::refresh_login(session, &user.id).await {
                        Ok(data) => session.set_login_data(data),
                        Err(e) => log::warn!("User refresh failed: {}", e),
                    }
                }
                Some(Err(e)) => {
                    log::error!("{} save failed: {}", T::KIND.title(), e);
                    toasts.error(e.user_message());
                    if e.requires_sign_in() {
                        session.sign_out();
                    }
                }
                None => {}
            }
        });
    }
}
