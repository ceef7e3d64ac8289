use leptos::prelude::*;
use leptos_router::components::A;

/// Landing point for protected actions attempted without a session.
/// Tokens are issued elsewhere; this page only points the user onwards.
#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"GuardHire"</h1>
                <h2>"Sign in required"</h2>
                <p>"Please sign in to use this feature."</p>
                <div class="login-info">
                    <p>"Don't have an account yet?"</p>
                    <A href="/register/individual">"Register as an individual"</A>
                    <A href="/register/corporate">"Register as a corporate client"</A>
                    <A href="/register/security-company">"Register as a security company"</A>
                </div>
                <A href="/">"Back to search"</A>
            </div>
        </div>
    }
}
