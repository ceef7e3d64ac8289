use contracts::domain::a004_profile::ContactSection;
use leptos::prelude::*;

use super::{opt_text_input, section_frame, view_row};
use crate::domain::a004_profile::ui::view_model::SectionViewModel;
use crate::system::auth::context::use_session;

#[component]
pub fn ContactEditor() -> impl IntoView {
    let vm = SectionViewModel::<ContactSection>::new(use_session());

    let viewing = move || view! {
        {view_row("Email", move || vm.saved(|s| s.email.clone()))}
        {view_row("Phone", move || vm.saved(|s| s.phone_number.clone()))}
        {view_row("Website", move || vm.saved(|s| s.website.clone()))}
        {view_row("Address", move || vm.saved(|s| s.address.clone()))}
        {view_row("Postcode", move || vm.saved(|s| s.postcode.clone()))}
    };

    let editing = move || view! {
        {opt_text_input(vm, "email", "Email", "email", |s| &s.email, |s, v| s.email = v)}
        {opt_text_input(vm, "phoneNumber", "Phone", "tel", |s| &s.phone_number, |s, v| s.phone_number = v)}
        {opt_text_input(vm, "website", "Website", "url", |s| &s.website, |s, v| s.website = v)}
        {opt_text_input(vm, "address", "Address", "text", |s| &s.address, |s, v| s.address = v)}
        {opt_text_input(vm, "postcode", "Postcode", "text", |s| &s.postcode, |s, v| s.postcode = v)}
    };

    section_frame(vm, ViewFn::from(viewing), ViewFn::from(editing))
}
