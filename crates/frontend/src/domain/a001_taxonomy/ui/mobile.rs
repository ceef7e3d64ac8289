use contracts::domain::a001_taxonomy::{DropdownState, RoleChoice, Taxonomy, TaxonomyId};
use leptos::html;
use leptos::prelude::*;

use super::{choose, close_on_outside_click, trigger_text};

/// Accordion rendering of the category picker for narrow screens
#[component]
pub fn MobileDynamicDropdown(
    taxonomy_id: TaxonomyId,
    #[prop(into)]
    looking_for: Signal<String>,
    #[prop(into)]
    sub_category: Signal<String>,
    on_select: Callback<RoleChoice>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
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
        <div class="mobile-dropdown" node_ref=root>
            <button
                type="button"
                class="mobile-dropdown__trigger"
                aria-expanded=move || state.with(DropdownState::is_open).to_string()
                on:click=move |_| state.update(DropdownState::toggle)
            >
                {label}
                <span class="mobile-dropdown__chevron">
                    {move || if state.with(DropdownState::is_open) { "▲" } else { "▼" }}
                </span>
            </button>
            <Show when=move || state.with(DropdownState::is_open)>
                <div class="mobile-dropdown__panel">
                    {taxonomy
                        .categories
                        .iter()
                        .map(|category| {
                            let id = category.id.clone();
                            let id_for_click = id.clone();
                            let expanded = move || state.with(|s| s.open_category_id() == Some(id.as_str()));
                            let roles = category.roles.clone();
                            view! {
                                <section class="mobile-dropdown__section">
                                    <button
                                        type="button"
                                        class="mobile-dropdown__header"
                                        on:click=move |_| state.update(|s| s.open_category(&id_for_click))
                                    >
                                        {category.title.clone()}
                                        <span>{let expanded = expanded.clone(); move || if expanded() { "−" } else { "+" }}</span>
                                    </button>
                                    <Show when=expanded>
                                        <div class="mobile-dropdown__roles">
                                            {roles
                                                .iter()
                                                .map(|role| {
                                                    let role = role.clone();
                                                    let text = role.clone();
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class="mobile-dropdown__role"
                                                            on:click=move |_| choose(state, taxonomy, &role, on_select)
                                                        >
                                                            {text}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </section>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
