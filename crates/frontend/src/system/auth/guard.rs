use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

pub const SIGN_IN_PATH: &str = "/sign-in";

/// Renders children only with a session; otherwise sends the user to sign-in
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.has_session()
            fallback=|| view! { <Redirect path=SIGN_IN_PATH /> }
        >
            {children()}
        </Show>
    }
}
