pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::shared::toast::ToastHost;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              routed page                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {children()}
            </main>
            <ToastHost />
        </div>
    }
}
