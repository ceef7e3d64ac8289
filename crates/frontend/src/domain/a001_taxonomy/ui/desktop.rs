use contracts::domain::a001_taxonomy::{DropdownState, RoleChoice, Taxonomy, TaxonomyId};
use leptos::html;
use leptos::prelude::*;

use super::{choose, close_on_outside_click, trigger_text};

/// Floating two-level picker
#[component]
pub fn DynamicDropdown(
    taxonomy_id: TaxonomyId,
    /// Current category title
    #[prop(into)]
    looking_for: Signal<String>,
    /// Current role
    #[prop(into)]
    sub_category: Signal<String>,
    on_select: Callback<RoleChoice>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let taxonomy = Taxonomy::load(taxonomy_id);
    let state = RwSignal::new(DropdownState::Closed);
    let root = NodeRef::<html::Div>::new();

    close_on_outside_click(state, root);

    let label = move || {
        trigger_text(
            &looking_for.get(),
            &sub_category.get(),
            &placeholder.get().unwrap_or_else(|| "What are you looking for?".to_string()),
        )
    };

    view! {
        <div class="dynamic-dropdown" node_ref=root>
            <button
                type="button"
                class="dynamic-dropdown__trigger"
                class:dynamic-dropdown__trigger--invalid=move || error.get().is_some()
                aria-expanded=move || state.with(DropdownState::is_open).to_string()
                on:click=move |_| state.update(DropdownState::toggle)
            >
                {label}
            </button>
            <Show when=move || state.with(DropdownState::is_open)>
                <ul class="dynamic-dropdown__menu" role="menu">
                    {taxonomy
                        .categories
                        .iter()
                        .map(|category| {
                            let id = category.id.clone();
                            let id_for_click = id.clone();
                            let expanded = move || state.with(|s| s.open_category_id() == Some(id.as_str()));
                            let roles = category.roles.clone();
                            view! {
                                <li class="dynamic-dropdown__category">
                                    <button
                                        type="button"
                                        class="dynamic-dropdown__category-button"
                                        class:dynamic-dropdown__category-button--open=expanded.clone()
                                        on:click=move |_| state.update(|s| s.open_category(&id_for_click))
                                    >
                                        {category.title.clone()}
                                    </button>
                                    <Show when=expanded>
                                        <ul class="dynamic-dropdown__roles">
                                            {roles
                                                .iter()
                                                .map(|role| {
                                                    let role = role.clone();
                                                    let text = role.clone();
                                                    view! {
                                                        <li>
                                                            <button
                                                                type="button"
                                                                class="dynamic-dropdown__role"
                                                                on:click=move |_| choose(state, taxonomy, &role, on_select)
                                                            >
                                                                {text}
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}
