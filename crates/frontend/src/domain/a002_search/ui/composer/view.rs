use contracts::domain::a001_taxonomy::{RoleChoice, TaxonomyId};
use contracts::domain::a002_search::{SearchComposer, SearchMode, SearchSnapshot, DISTANCE_OPTIONS, EXPERIENCE_OPTIONS};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::view_model::SearchComposerViewModel;
use crate::domain::a001_taxonomy::ui::{DynamicDropdown, MobileDynamicDropdown};
use crate::shared::components::ui::{static_options, Button, Input, Select};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::SIGN_IN_PATH;

#[component]
pub fn SearchComponent(
    taxonomy_id: TaxonomyId,
    /// Directories without an experience filter
    #[prop(optional)]
    hide_experience: bool,
    /// Selection to resume from
    #[prop(optional_no_strip)]
    initial: Option<SearchSnapshot>,
) -> impl IntoView {
    let vm = SearchComposerViewModel::new(taxonomy_id, hide_experience);
    if let Some(snapshot) = initial.as_ref() {
        vm.warm_start(snapshot);
    }

    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let looking_for = Signal::derive(move || vm.composer.with(|c| c.selection().looking_for.clone()));
    let sub_category = Signal::derive(move || vm.composer.with(|c| c.selection().sub_category.clone()));
    let is_advanced = move || vm.mode() == SearchMode::Advanced;
    let pick_error = Signal::derive(move || {
        vm.field_errors
            .with(|e| e.get("lookingFor").or_else(|| e.get("subCategory")).map(str::to_string))
    });

    let on_pick = Callback::new(move |choice: RoleChoice| vm.choose(choice));

    let on_toggle = {
        let navigate = navigate.clone();
        move |_| {
            if !vm.toggle_mode_command(session.has_session()) {
                toasts.info("Sign in to use the advanced search");
                navigate(SIGN_IN_PATH, NavigateOptions::default());
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        vm.submit_command(toasts, move |url| navigate(&url, NavigateOptions::default()));
    };

    view! {
        <form class="search-composer" on:submit=on_submit>
            <div class="search-composer__header">
                <h2>{taxonomy_id.title()}</h2>
                <button type="button" class="search-composer__mode" on:click=on_toggle>
                    {move || if is_advanced() { "Basic search" } else { "Advanced search" }}
                </button>
            </div>

            <div class="search-composer__picker search-composer__picker--desktop">
                <DynamicDropdown
                    taxonomy_id=taxonomy_id
                    looking_for=looking_for
                    sub_category=sub_category
                    on_select=on_pick
                    error=pick_error
                />
            </div>
            <div class="search-composer__picker search-composer__picker--mobile">
                <MobileDynamicDropdown
                    taxonomy_id=taxonomy_id
                    looking_for=looking_for
                    sub_category=sub_category
                    on_select=on_pick
                />
            </div>

            <Input
                id="search-postcode"
                label="Postcode"
                placeholder="e.g. SW1A 1AA"
                value=Signal::derive(move || vm.composer.with(|c| c.selection().postcode.clone()))
                on_input=Callback::new(move |v| vm.set_postcode(v))
                error=vm.field_error("postcode")
                autocomplete="postal-code"
            />

            <Show when=is_advanced>
                <Select
                    id="search-distance"
                    label="Distance"
                    placeholder="Any distance"
                    value=Signal::derive(move || vm.composer.with(|c| c.selection().distance.clone()))
                    options=static_options(DISTANCE_OPTIONS)
                    on_change=Callback::new(move |v| vm.set_distance(v))
                    error=vm.field_error("distance")
                />
                <Show when=move || !vm.composer.with(SearchComposer::is_experience_hidden)>
                    <Select
                        id="search-experience"
                        label="Experience"
                        placeholder="Any experience"
                        value=Signal::derive(move || vm.composer.with(|c| c.selection().experience.clone()))
                        options=static_options(EXPERIENCE_OPTIONS)
                        on_change=Callback::new(move |v| vm.set_experience(v))
                        error=vm.field_error("experience")
                    />
                </Show>
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="search-composer__actions">
                <Button variant="ghost" on_click=Callback::new(move |_| vm.reset_command())>
                    "Clear"
                </Button>
                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || !vm.can_submit())
                    loading=Signal::derive(move || vm.is_submitting.get())
                >
                    "Go"
                </Button>
            </div>
        </form>
    }
}
