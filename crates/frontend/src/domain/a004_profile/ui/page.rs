use leptos::prelude::*;

use super::sections::{
    AboutEditor, AvailabilityEditor, BasicInfoEditor, ContactEditor, FeesEditor, ServicesEditor,
};
use crate::shared::components::PageHeader;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAuth;

/// `/profile`: every section edits and saves on its own
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    view! {
        <RequireAuth>
            <div class="page page--profile">
                {move || session.user().map(|user| view! {
                    <PageHeader title=user.display_name() subtitle=user.role.label() />
                })}
                <BasicInfoEditor />
                <AboutEditor />
                <AvailabilityEditor />
                <FeesEditor />
                <ServicesEditor />
                <ContactEditor />
            </div>
        </RequireAuth>
    }
}
