use contracts::domain::a001_taxonomy::{RoleChoice, TaxonomyId};
use contracts::domain::a002_search::{ModeToggle, SearchComposer, SearchMode, SearchSnapshot};
use contracts::domain::common::ClientError;
use contracts::shared::validation::FormErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::shared::config::config;
use crate::shared::postcode::check_postcode;
use crate::shared::toast::ToastService;
use crate::system::auth::storage;

/// ViewModel for the search composer
#[derive(Clone, Copy)]
pub struct SearchComposerViewModel {
    pub composer: RwSignal<SearchComposer>,
    /// Missing-field messages, shown once a submit was attempted
    pub field_errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl SearchComposerViewModel {
    pub fn new(id: TaxonomyId, hide_experience: bool) -> Self {
        let composer = SearchComposer::new(id)
            .hide_experience(hide_experience)
            .page_size(config().search.page_size);
        Self {
            composer: RwSignal::new(composer),
            field_errors: RwSignal::new(FormErrors::new()),
            error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Resume from a stored or URL-derived snapshot
    pub fn warm_start(&self, snapshot: &SearchSnapshot) {
        self.composer.update(|c| c.restore(snapshot));
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting.get() && self.composer.with(SearchComposer::can_submit)
    }

    pub fn mode(&self) -> SearchMode {
        self.composer.with(SearchComposer::mode)
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    fn clear_field(&self, field: &str) {
        self.field_errors.update(|e| e.remove(field));
        self.error.set(None);
    }

    pub fn choose(&self, choice: RoleChoice) {
        let outcome = self
            .composer
            .try_update(|c| c.apply_choice(&choice))
            .unwrap_or(Ok(()));
        if let Err(e) = outcome {
            log::warn!("Ignoring role pick: {}", e);
            return;
        }
        self.clear_field("lookingFor");
        self.clear_field("subCategory");
    }

    pub fn set_looking_for(&self, title: String) {
        let outcome = self
            .composer
            .try_update(|c| c.set_looking_for(&title))
            .unwrap_or(Ok(()));
        match outcome {
            Ok(()) => self.clear_field("lookingFor"),
            Err(e) => self.field_errors.update(|errors| errors.insert("lookingFor", e.to_string())),
        }
    }

    pub fn set_sub_category(&self, role: String) {
        let outcome = self
            .composer
            .try_update(|c| c.set_sub_category(&role))
            .unwrap_or(Ok(()));
        match outcome {
            Ok(()) => self.clear_field("subCategory"),
            Err(e) => self.field_errors.update(|errors| errors.insert("subCategory", e.to_string())),
        }
    }

    pub fn set_distance(&self, value: String) {
        self.composer.update(|c| c.set_distance(&value));
        self.clear_field("distance");
    }

    pub fn set_experience(&self, value: String) {
        self.composer.update(|c| c.set_experience(&value));
        self.clear_field("experience");
    }

    pub fn set_postcode(&self, value: String) {
        self.composer.update(|c| c.set_postcode(&value));
        self.clear_field("postcode");
    }

    /// Basic/advanced switch; returns false when the user must sign in first
    pub fn toggle_mode_command(&self, has_session: bool) -> bool {
        match self.composer.try_update(|c| c.toggle_mode(has_session)) {
            Some(ModeToggle::Switched(mode)) => {
                log::debug!("Search mode switched to {}", mode.as_str());
                self.field_errors.set(FormErrors::new());
                true
            }
            Some(ModeToggle::SignInRequired) => false,
            None => true,
        }
    }

    /// Validate, check the postcode remotely, persist and navigate
    pub fn submit_command(&self, toasts: ToastService, navigate: impl Fn(String) + 'static) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let pending = match self.composer.with_untracked(SearchComposer::prepare_submit) {
            Ok(pending) => pending,
            Err(ClientError::Validation(errors)) => {
                self.field_errors.set(errors);
                return;
            }
            Err(e) => {
                self.error.set(Some(e.user_message()));
                return;
            }
        };

        let error = self.error;
        let is_submitting = self.is_submitting;
        is_submitting.set(true);
        error.set(None);

        spawn_local(async move {
            let outcome = check_postcode(pending.postcode()).await;
            let result = pending.resolve(outcome);
            is_submitting.set(false);
            match result {
                Ok(navigation) => {
                    log::info!("Search submitted: {}", navigation.url());
                    model::save_snapshot(&navigation.snapshot);
                    navigate(navigation.url());
                }
                Err(e) => {
                    log::warn!("Search blocked: {}", e);
                    toasts.error(e.user_message());
                    error.set(Some(e.user_message()));
                }
            }
        });
    }

    /// Blank the form and forget the stored search
    pub fn reset_command(&self) {
        storage::clear_search();
        self.composer.update(SearchComposer::reset);
        self.field_errors.set(FormErrors::new());
        self.error.set(None);
    }
}
