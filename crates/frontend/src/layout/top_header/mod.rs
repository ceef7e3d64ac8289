//! TopHeader component - brand, directory links and session actions

use contracts::domain::a001_taxonomy::TaxonomyId;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let menu_open = RwSignal::new(false);

    let sign_out = move |_| {
        session.sign_out();
        toasts.info("You have been signed out");
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <A href="/">
                    <span class="top-header__title">"GuardHire"</span>
                </A>
            </div>

            <button
                type="button"
                class="top-header__menu-toggle"
                aria-label="Menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <nav
                class="top-header__nav"
                class:top-header__nav--open=move || menu_open.get()
                on:click=move |_| menu_open.set(false)
            >
                {TaxonomyId::ALL
                    .into_iter()
                    .map(|id| view! { <A href=id.results_path()>{id.title()}</A> })
                    .collect_view()}
            </nav>

            <div class="top-header__actions">
                <Show
                    when=move || session.has_session()
                    fallback=|| view! {
                        <A href="/register">"Register"</A>
                        <A href="/sign-in">"Sign in"</A>
                    }
                >
                    <A href="/profile">
                        {move || session.user().map(|u| u.display_name()).unwrap_or_default()}
                    </A>
                    <button type="button" class="top-header__icon-btn" on:click=sign_out>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
