//! One editor per profile section, all on `SectionViewModel<T>`

mod about;
mod availability;
mod basic_info;
mod contact;
mod fees;
mod services;

pub use about::AboutEditor;
pub use availability::AvailabilityEditor;
pub use basic_info::BasicInfoEditor;
pub use contact::ContactEditor;
pub use fees::FeesEditor;
pub use services::ServicesEditor;

use contracts::domain::a004_profile::{ProfileSection, SectionEditor};
use contracts::domain::a004_profile::sections::non_blank;
use leptos::prelude::*;

use super::frame::SectionFrame;
use super::view_model::SectionViewModel;
use crate::shared::components::ui::Input;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Frame wired to the section's view model
fn section_frame<T>(vm: SectionViewModel<T>, viewing: ViewFn, editing: ViewFn) -> impl IntoView
where
    T: ProfileSection + Send + Sync + 'static,
{
    let session = use_session();
    let toasts = use_toasts();

    view! {
        <SectionFrame
            title=T::KIND.title()
            phase=Signal::derive(move || vm.editor.with(SectionEditor::phase))
            on_edit=Callback::new(move |_| vm.begin_edit())
            on_save=Callback::new(move |_| vm.save_command(session, toasts))
            on_cancel=Callback::new(move |_| vm.cancel())
            viewing=viewing
            editing=editing
        />
    }
}

/// Input bound to an optional text field of the draft; blank clears it
fn opt_text_input<T>(
    vm: SectionViewModel<T>,
    key: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&T) -> &Option<String>,
    set: fn(&mut T, Option<String>),
) -> impl IntoView
where
    T: ProfileSection + Send + Sync + 'static,
{
    view! {
        <Input
            id=key
            label=label
            input_type=input_type
            value=Signal::derive(move || vm.current(|s| get(s).clone().unwrap_or_default()))
            on_input=Callback::new(move |value: String| vm.edit(move |s| set(s, non_blank(value))))
            error=vm.field_error(key)
        />
    }
}

/// Read-only row of view mode
fn view_row(label: &'static str, value: impl Fn() -> Option<String> + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="profile-section__row">
            <span class="profile-section__label">{label}</span>
            <span class="profile-section__value">
                {move || value().unwrap_or_else(|| "Not set".to_string())}
            </span>
        </div>
    }
}
