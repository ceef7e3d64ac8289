use contracts::domain::a004_profile::ServicesSection;
use leptos::prelude::*;

use super::section_frame;
use crate::domain::a004_profile::ui::view_model::SectionViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::system::auth::context::use_session;

#[component]
pub fn ServicesEditor() -> impl IntoView {
    let vm = SectionViewModel::<ServicesSection>::new(use_session());
    let new_service = RwSignal::new(String::new());

    let add = move || {
        let service = new_service.get_untracked();
        vm.edit(move |s| {
            s.add(&service);
        });
        new_service.set(String::new());
    };

    let viewing = move || view! {
        <ul class="tag-list">
            <Show
                when=move || vm.saved(|s| !s.services.is_empty())
                fallback=|| view! { <li class="tag-list__empty">"No services listed"</li> }
            >
                <For
                    each=move || vm.saved(|s| s.services.clone())
                    key=|service| service.clone()
                    children=|service| view! { <li class="tag">{service}</li> }
                />
            </Show>
        </ul>
    };

    let editing = move || view! {
        <ul class="tag-list">
            <For
                each=move || vm.current(|s| s.services.clone())
                key=|service| service.clone()
                children=move |service| {
                    let label = service.clone();
                    view! {
                        <li class="tag">
                            {label}
                            <button
                                type="button"
                                class="tag__remove"
                                aria-label="Remove"
                                on:click=move |_| {
                                    let service = service.clone();
                                    vm.edit(move |s| s.remove(&service))
                                }
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
        <div class="form__row">
            <Input
                id="newService"
                placeholder="Add a service"
                value=new_service
                on_input=Callback::new(move |v| new_service.set(v))
            />
            <Button
                variant="secondary"
                disabled=Signal::derive(move || new_service.with(|s| s.trim().is_empty()))
                on_click=Callback::new(move |_| add())
            >
                "Add"
            </Button>
        </div>
    };

    section_frame(vm, ViewFn::from(viewing), ViewFn::from(editing))
}
