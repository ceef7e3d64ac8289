use crate::routes::routes::AppRoutes;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shown by the shell and raised from any page
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
