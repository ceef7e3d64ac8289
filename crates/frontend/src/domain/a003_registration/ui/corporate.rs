use contracts::domain::a003_registration::corporate::INDUSTRIES;
use contracts::domain::a003_registration::{CorporateFields, RegistrationPayload};
use leptos::prelude::*;

use super::fields::{account_fields, text_field};
use super::view_model::RegistrationViewModel;
use crate::shared::components::ui::{plain_options, Button, Select};
use crate::shared::toast::use_toasts;

#[component]
pub fn CorporateForm(
    #[prop(optional)]
    on_submit: Option<Callback<RegistrationPayload>>,
    on_registered: Callback<()>,
) -> impl IntoView {
    let vm = RegistrationViewModel::<CorporateFields>::new();
    let toasts = use_toasts();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(toasts, on_submit, on_registered);
    };

    view! {
        <form class="registration-form" novalidate=true on:submit=submit>
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {text_field(vm, "companyName", "Company name", "text", |f| &f.company_name, |f, v| f.company_name = v)}
            <div class="form__row">
                {text_field(vm, "contactName", "Contact name", "text", |f| &f.contact_name, |f, v| f.contact_name = v)}
                {text_field(vm, "jobTitle", "Job title", "text", |f| &f.job_title, |f, v| f.job_title = v)}
            </div>
            <Select
                id="industry"
                label="Industry"
                placeholder="Choose an industry"
                value=Signal::derive(move || vm.form.with(|f| f.fields().industry.clone()))
                options=plain_options(INDUSTRIES.iter().copied())
                on_change=Callback::new(move |v: String| vm.update("industry", move |f| f.industry = v))
                error=vm.error_for("industry")
            />
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
