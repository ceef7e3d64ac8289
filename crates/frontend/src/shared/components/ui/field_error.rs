use leptos::prelude::*;

/// Inline message under a form control; renders nothing without an error
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <p class="form__error" role="alert">{message}</p> })
    }
}
