use contracts::domain::a001_taxonomy::TaxonomyId;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::a002_search::ui::home::HomePage;
use crate::domain::a002_search::ui::results::SearchResultsPage;
use crate::domain::a003_registration::ui::RegisterPage;
use crate::domain::a004_profile::ui::ProfilePage;
use crate::layout::Shell;
use crate::system::pages::sign_in::SignInPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to search"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/sign-in") view=SignInPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/register/:role") view=RegisterPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route
                        path=path!("/professionals")
                        view=|| view! { <SearchResultsPage taxonomy_id=TaxonomyId::Professionals /> }
                    />
                    <Route
                        path=path!("/security-companies")
                        view=|| view! { <SearchResultsPage taxonomy_id=TaxonomyId::SecurityCompanies /> }
                    />
                    <Route
                        path=path!("/course-provider")
                        view=|| view! { <SearchResultsPage taxonomy_id=TaxonomyId::CourseProviders /> }
                    />
                    <Route
                        path=path!("/connecting-business")
                        view=|| view! { <SearchResultsPage taxonomy_id=TaxonomyId::ConnectingBusiness /> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
