use contracts::domain::a004_profile::sections::{non_blank, ABOUT_ME_MAX_LEN};
use contracts::domain::a004_profile::AboutSection;
use leptos::prelude::*;

use super::{opt_text_input, section_frame, view_row};
use crate::domain::a004_profile::ui::view_model::SectionViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::system::auth::context::use_session;

#[component]
pub fn AboutEditor() -> impl IntoView {
    let vm = SectionViewModel::<AboutSection>::new(use_session());

    let viewing = move || view! {
        {view_row("Headline", move || vm.saved(|s| s.headline.clone()))}
        {view_row("About me", move || vm.saved(|s| s.about_me.clone()))}
        {view_row("Years of experience", move || vm.saved(|s| s.years_of_experience.map(|y| y.to_string())))}
    };

    let editing = move || view! {
        {opt_text_input(vm, "headline", "Headline", "text", |s| &s.headline, |s, v| s.headline = v)}
        <Textarea
            id="aboutMe"
            label="About me"
            rows=6
            max_len=ABOUT_ME_MAX_LEN
            value=Signal::derive(move || vm.current(|s| s.about_me.clone().unwrap_or_default()))
            on_input=Callback::new(move |v: String| vm.edit(move |s| s.about_me = non_blank(v)))
            error=vm.field_error("aboutMe")
        />
        <Input
            id="yearsOfExperience"
            label="Years of experience"
            input_type="number"
            value=Signal::derive(move || vm.current(|s| s.years_of_experience.map(|y| y.to_string()).unwrap_or_default()))
            on_input=Callback::new(move |v: String| vm.edit(move |s| s.years_of_experience = v.trim().parse().ok()))
            error=vm.field_error("yearsOfExperience")
        />
    };

    section_frame(vm, ViewFn::from(viewing), ViewFn::from(editing))
}
