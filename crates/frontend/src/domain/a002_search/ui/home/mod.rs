use contracts::domain::a001_taxonomy::TaxonomyId;
use leptos::prelude::*;

use super::composer::{load_snapshot, SearchComponent};
use crate::shared::components::PageHeader;

/// Landing page: one composer per directory, switched by tabs
#[component]
pub fn HomePage() -> impl IntoView {
    let active = RwSignal::new(TaxonomyId::Professionals);

    view! {
        <div class="page page--home">
            <PageHeader title="Find security professionals near you" />
            <div class="tabs" role="tablist">
                {TaxonomyId::ALL
                    .into_iter()
                    .map(|id| view! {
                        <button
                            type="button"
                            role="tab"
                            class="tabs__tab"
                            class:tabs__tab--active=move || active.get() == id
                            aria-selected=move || (active.get() == id).to_string()
                            on:click=move |_| active.set(id)
                        >
                            {id.title()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || {
                let id = active.get();
                view! {
                    <SearchComponent
                        taxonomy_id=id
                        hide_experience=!id.has_experience_filter()
                        initial=load_snapshot(id)
                    />
                }
            }}
        </div>
    }
}
