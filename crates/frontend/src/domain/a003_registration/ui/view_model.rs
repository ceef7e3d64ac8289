use contracts::domain::a003_registration::{RegistrationFields, RegistrationForm, RegistrationPayload};
use contracts::domain::common::ClientError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::postcode::check_postcode;
use crate::shared::toast::ToastService;
use crate::system::auth::api;

/// ViewModel for any registration form
pub struct RegistrationViewModel<F>
where
    F: RegistrationFields + Send + Sync + 'static,
{
    pub form: RwSignal<RegistrationForm<F>>,
    /// Banner error from the last submission
    pub error: RwSignal<Option<String>>,
    /// Waiting on `POST /auth/register`
    pub posting: RwSignal<bool>,
}

impl<F> Clone for RegistrationViewModel<F>
where
    F: RegistrationFields + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for RegistrationViewModel<F> where F: RegistrationFields + Send + Sync + 'static {}

impl<F> RegistrationViewModel<F>
where
    F: RegistrationFields + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RegistrationForm::new()),
            error: RwSignal::new(None),
            posting: RwSignal::new(false),
        }
    }

    pub fn update(&self, field: &str, change: impl FnOnce(&mut F)) {
        self.form.update(|form| form.update(field, change));
    }

    pub fn touch(&self, field: &str) {
        self.form.update(|form| form.touch(field));
    }

    /// Message under `field`, once the user reached it
    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.visible_error(field).map(str::to_string)))
    }

    pub fn is_busy(&self) -> bool {
        self.posting.get() || self.form.with(RegistrationForm::is_submitting)
    }

    pub fn can_submit(&self) -> bool {
        !self.posting.get() && self.form.with(RegistrationForm::can_submit)
    }

    fn report(&self, toasts: ToastService, err: &ClientError) {
        log::warn!("Registration blocked: {}", err);
        match err {
            ClientError::InFlight => {}
            ClientError::Validation(_) => toasts.error("Please correct the highlighted fields"),
            other => {
                toasts.error(other.user_message());
                self.error.set(Some(other.user_message()));
            }
        }
    }

    /// Validate locally, confirm the postcode remotely, then hand the payload
    /// to `on_submit`, or register it with the backend when none is given.
    pub fn submit_command(
        &self,
        toasts: ToastService,
        on_submit: Option<Callback<RegistrationPayload>>,
        on_registered: Callback<()>,
    ) {
        if self.posting.get_untracked() {
            return;
        }
        let started = self.form.try_update(RegistrationForm::begin_submit);
        let postcode = match started {
            Some(Ok(postcode)) => postcode,
            Some(Err(e)) => return self.report(toasts, &e),
            None => return,
        };
        self.error.set(None);

        let vm = *self;
        spawn_local(async move {
            let outcome = check_postcode(&postcode).await;
            let payload = match vm.form.try_update(|f| f.finish_submit(outcome)) {
                Some(Ok(payload)) => payload,
                Some(Err(e)) => return vm.report(toasts, &e),
                None => return,
            };
            log::info!("Registration payload ready for {}", payload.email());

            if let Some(callback) = on_submit {
                callback.run(payload);
                return;
            }

            vm.posting.set(true);
            let result = api::register(&payload).await;
            vm.posting.set(false);
            match result {
                Ok(response) => {
                    toasts.success(
                        response
                            .message
                            .unwrap_or_else(|| "Your account has been created".to_string()),
                    );
                    on_registered.run(());
                }
                Err(e) => vm.report(toasts, &e),
            }
        });
    }
}

impl<F> Default for RegistrationViewModel<F>
where
    F: RegistrationFields + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
