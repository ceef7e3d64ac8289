use contracts::domain::a003_registration::{IndividualFields, RegistrationPayload};
use leptos::prelude::*;

use super::fields::{account_fields, date_of_birth_field, text_field};
use super::view_model::RegistrationViewModel;
use crate::shared::components::ui::Button;
use crate::shared::toast::use_toasts;

/// Sign-up for individual professionals and private clients
#[component]
pub fn ClientRegistrationForm(
    /// Receives the payload instead of the default `/auth/register` call
    #[prop(optional)]
    on_submit: Option<Callback<RegistrationPayload>>,
    on_registered: Callback<()>,
) -> impl IntoView {
    let vm = RegistrationViewModel::<IndividualFields>::new();
    let toasts = use_toasts();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(toasts, on_submit, on_registered);
    };

    view! {
        <form class="registration-form" novalidate=true on:submit=submit>
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="form__row">
                {text_field(vm, "firstName", "First name", "text", |f| &f.first_name, |f, v| f.first_name = v)}
                {text_field(vm, "lastName", "Last name", "text", |f| &f.last_name, |f, v| f.last_name = v)}
            </div>
            {date_of_birth_field(vm, |f| &f.date_of_birth, |f| &mut f.date_of_birth)}
            {text_field(vm, "siaLicenceNumber", "SIA licence number (optional)", "text", |f| &f.sia_licence_number, |f, v| f.sia_licence_number = v)}
            {account_fields(vm)}
            <Button
                button_type="submit"
                disabled=Signal::derive(move || !vm.can_submit())
                loading=Signal::derive(move || vm.is_busy())
            >
                "Create account"
            </Button>
        </form>
    }
}
