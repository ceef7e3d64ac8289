use contracts::domain::a004_profile::BasicInfoSection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{opt_text_input, section_frame, view_row};
use crate::domain::a004_profile::ui::view_model::SectionViewModel;
use crate::shared::toast::use_toasts;
use crate::shared::upload::upload_file;
use crate::system::auth::context::use_session;

#[component]
pub fn BasicInfoEditor() -> impl IntoView {
    let session = use_session();
    let vm = SectionViewModel::<BasicInfoSection>::new(session);
    let toasts = use_toasts();
    let uploading = RwSignal::new(false);

    let on_photo = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        uploading.set(true);
        spawn_local(async move {
            match upload_file(session, file).await {
                Ok(url) => vm.edit(move |s| s.profile_photo = Some(url)),
                Err(e) => {
                    log::error!("Photo upload failed: {}", e);
                    toasts.error(e.user_message());
                    if e.requires_sign_in() {
                        session.sign_out();
                    }
                }
            }
            uploading.set(false);
        });
    };

    let photo = move |src: Option<String>| {
        src.map(|src| view! { <img class="profile-photo" src=src alt="Profile photo" /> })
    };

    let viewing = move || view! {
        {move || photo(vm.saved(|s| s.profile_photo.clone()))}
        {view_row("First name", move || vm.saved(|s| s.first_name.clone()))}
        {view_row("Last name", move || vm.saved(|s| s.last_name.clone()))}
        {view_row("Screen name", move || vm.saved(|s| s.screen_name.clone()))}
    };

    let editing = move || view! {
        {move || photo(vm.current(|s| s.profile_photo.clone()))}
        <div class="form__group">
            <label class="form__label" for="profilePhoto">"Profile photo"</label>
            <input
                id="profilePhoto"
                type="file"
                accept="image/*"
                disabled=move || uploading.get()
                on:change=on_photo
            />
            <Show when=move || uploading.get()>
                <span class="form__hint">"Uploading…"</span>
            </Show>
        </div>
        {opt_text_input(vm, "firstName", "First name", "text", |s| &s.first_name, |s, v| s.first_name = v)}
        {opt_text_input(vm, "lastName", "Last name", "text", |s| &s.last_name, |s, v| s.last_name = v)}
        {opt_text_input(vm, "screenName", "Screen name", "text", |s| &s.screen_name, |s, v| s.screen_name = v)}
    };

    section_frame(vm, ViewFn::from(viewing), ViewFn::from(editing))
}
