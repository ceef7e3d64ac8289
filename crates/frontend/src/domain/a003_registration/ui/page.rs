use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_params_map;

use super::{ClientRegistrationForm, CorporateForm, SecurityCompanyForm};
use crate::shared::components::PageHeader;
use crate::system::auth::guard::SIGN_IN_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegistrationKind {
    Individual,
    Corporate,
    SecurityCompany,
}

impl RegistrationKind {
    fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "individual" => Some(Self::Individual),
            "corporate" => Some(Self::Corporate),
            "security-company" => Some(Self::SecurityCompany),
            _ => None,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Individual => "Register as an individual",
            Self::Corporate => "Register your business",
            Self::SecurityCompany => "Register your security company",
        }
    }
}

/// `/register/:role`
#[component]
pub fn RegisterPage() -> impl IntoView {
    let params = use_params_map();
    let registered = RwSignal::new(false);
    let on_registered = Callback::new(move |_| registered.set(true));

    move || {
        if registered.get() {
            return view! { <Redirect path=SIGN_IN_PATH /> }.into_any();
        }
        let slug = params.with(|p| p.get("role").unwrap_or_default());
        match RegistrationKind::from_slug(&slug) {
            Some(kind) => view! {
                <div class="page page--register">
                    <PageHeader title=kind.title() />
                    {match kind {
                        RegistrationKind::Individual => view! { <ClientRegistrationForm on_registered=on_registered /> }.into_any(),
                        RegistrationKind::Corporate => view! { <CorporateForm on_registered=on_registered /> }.into_any(),
                        RegistrationKind::SecurityCompany => view! { <SecurityCompanyForm on_registered=on_registered /> }.into_any(),
                    }}
                </div>
            }
            .into_any(),
            None => view! {
                <div class="page page--register">
                    <PageHeader title="Create an account" />
                    <A href="/register/individual">"Individual"</A>
                    <A href="/register/corporate">"Corporate client"</A>
                    <A href="/register/security-company">"Security company"</A>
                </div>
            }
            .into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lookup() {
        assert_eq!(RegistrationKind::from_slug("corporate"), Some(RegistrationKind::Corporate));
        assert_eq!(RegistrationKind::from_slug("security-company"), Some(RegistrationKind::SecurityCompany));
        assert_eq!(RegistrationKind::from_slug("admin"), None);
    }
}
