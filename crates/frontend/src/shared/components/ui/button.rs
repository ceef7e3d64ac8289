use leptos::prelude::*;

/// Button with variants (primary, secondary, ghost, link) and sizes (sm, md)
#[component]
pub fn Button(
    /// "primary" (default), "secondary", "ghost" or "link"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// While set the button is disabled and shows a busy label
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "link" => "button--link",
        _ => "button--primary",
    };
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };
    let is_loading = move || loading.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!(
                "button {} {} {}",
                variant_class(),
                size_class(),
                class.get().unwrap_or_default()
            )
            disabled=move || disabled.get().unwrap_or(false) || is_loading()
            aria-busy=move || is_loading().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=is_loading fallback=move || children()>
                "Please wait…"
            </Show>
        </button>
    }
}
