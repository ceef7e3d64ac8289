use contracts::domain::a001_taxonomy::{Taxonomy, TaxonomyId};
use contracts::domain::a003_registration::{RegistrationPayload, SecurityCompanyFields};
use leptos::prelude::*;

use super::fields::{account_fields, text_field};
use super::view_model::RegistrationViewModel;
use crate::shared::components::ui::{Button, Checkbox, FieldError};
use crate::shared::toast::use_toasts;

#[component]
pub fn SecurityCompanyForm(
    #[prop(optional)]
    on_submit: Option<Callback<RegistrationPayload>>,
    on_registered: Callback<()>,
) -> impl IntoView {
    let vm = RegistrationViewModel::<SecurityCompanyFields>::new();
    let toasts = use_toasts();
    let offered = Taxonomy::load(TaxonomyId::SecurityCompanies);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(toasts, on_submit, on_registered);
    };

    view! {
        <form class="registration-form" novalidate=true on:submit=submit>
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {text_field(vm, "companyName", "Company name", "text", |f| &f.company_name, |f, v| f.company_name = v)}
            {text_field(vm, "companyRegistrationNumber", "Company registration number", "text", |f| &f.company_registration_number, |f, v| f.company_registration_number = v)}
            {text_field(vm, "contactName", "Contact name", "text", |f| &f.contact_name, |f, v| f.contact_name = v)}
            {text_field(vm, "approvedContractorNumber", "ACS reference (optional)", "text", |f| &f.approved_contractor_number, |f, v| f.approved_contractor_number = v)}
            <fieldset class="form__group">
                <legend class="form__label">"Services offered"</legend>
                {offered
                    .titles()
                    .map(|service| {
                        let name = service.to_string();
                        let checked_name = name.clone();
                        view! {
                            <Checkbox
                                label=name.clone()
                                checked=Signal::derive(move || vm.form.with(|f| f.fields().services.contains(&checked_name)))
                                on_change=Callback::new(move |_| {
                                    let name = name.clone();
                                    vm.update("services", move |f| f.toggle_service(&name))
                                })
                            />
                        }
                    })
                    .collect_view()}
                <FieldError error=vm.error_for("services") />
            </fieldset>
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
