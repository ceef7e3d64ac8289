//! Category → role pickers.
//!
//! Both components drive the same `DropdownState` machine; the desktop one
//! floats and closes on outside clicks, the mobile one expands inline.

mod desktop;
mod mobile;

pub use desktop::DynamicDropdown;
pub use mobile::MobileDynamicDropdown;

use contracts::domain::a001_taxonomy::{DropdownState, RoleChoice, Taxonomy};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Close `state` on any document click that lands outside `root`
fn close_on_outside_click(state: RwSignal<DropdownState>, root: NodeRef<html::Div>) {
    let handle = window_event_listener(ev::click, move |event| {
        let Some(root) = root.get_untracked() else {
            return;
        };
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = root.contains(target.as_ref());
        if state.with_untracked(|s| s.closes_on_click(inside)) {
            state.update(DropdownState::click_outside);
        }
    });
    on_cleanup(move || handle.remove());
}

/// Pick a role in the open category and forward the choice
fn choose(
    state: RwSignal<DropdownState>,
    taxonomy: &'static Taxonomy,
    role: &str,
    on_select: Callback<RoleChoice>,
) {
    let choice = state.try_update(|s| s.choose_role(taxonomy, role)).flatten();
    if let Some(choice) = choice {
        log::debug!("Picked {} / {}", choice.category_title, choice.role);
        on_select.run(choice);
    }
}

/// Text on the trigger: the current pick, or the placeholder
fn trigger_text(looking_for: &str, sub_category: &str, placeholder: &str) -> String {
    match (looking_for.is_empty(), sub_category.is_empty()) {
        (true, _) => placeholder.to_string(),
        (false, true) => looking_for.to_string(),
        (false, false) => format!("{} · {}", looking_for, sub_category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_text() {
        assert_eq!(trigger_text("", "", "Select"), "Select");
        assert_eq!(trigger_text("Door Supervision", "", "Select"), "Door Supervision");
        assert_eq!(
            trigger_text("Door Supervision", "Close Protection", "Select"),
            "Door Supervision · Close Protection"
        );
    }
}
