use contracts::domain::a004_profile::EditPhase;
use leptos::prelude::*;

use crate::shared::components::ui::Button;

/// Card around one profile section.
///
/// `viewing` renders the saved snapshot, `editing` the draft form; the
/// buttons follow the editor phase.
#[component]
pub fn SectionFrame(
    #[prop(into)]
    title: String,
    #[prop(into)]
    phase: Signal<EditPhase>,
    on_edit: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    viewing: ViewFn,
    editing: ViewFn,
) -> impl IntoView {
    let is_viewing = move || phase.get() == EditPhase::Viewing;
    let is_saving = Signal::derive(move || phase.get() == EditPhase::Saving);

    view! {
        <section class="profile-section">
            <header class="profile-section__header">
                <h3>{title}</h3>
                <Show when=is_viewing>
                    <Button variant="link" size="sm" on_click=Callback::new(move |_| on_edit.run(()))>
                        "Edit"
                    </Button>
                </Show>
            </header>
            <div class="profile-section__body">
                <Show when=is_viewing fallback=move || editing.run()>
                    {viewing.run()}
                </Show>
            </div>
            <Show when=move || !is_viewing()>
                <footer class="profile-section__actions">
                    <Button
                        variant="secondary"
                        disabled=is_saving
                        on_click=Callback::new(move |_| on_cancel.run(()))
                    >
                        "Cancel"
                    </Button>
                    <Button loading=is_saving on_click=Callback::new(move |_| on_save.run(()))>
                        "Save"
                    </Button>
                </footer>
            </Show>
        </section>
    }
}
