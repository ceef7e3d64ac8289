use contracts::domain::a004_profile::sections::non_blank;
use contracts::domain::a004_profile::{AvailabilitySection, Day, TimeSlot, WeeklySchedule};
use leptos::prelude::*;

use super::{section_frame, view_row};
use crate::domain::a004_profile::ui::view_model::SectionViewModel;
use crate::shared::components::ui::{plain_options, Checkbox, Input, Select};
use crate::system::auth::context::use_session;

const NOTICE_PERIODS: &[&str] = &["Immediate", "1 week", "2 weeks", "1 month", "More than 1 month"];

/// Slot × day grid; cells toggle only when `on_toggle` is given
fn schedule_grid(
    schedule: impl Fn() -> WeeklySchedule + Send + Sync + Clone + 'static,
    on_toggle: Option<Callback<(TimeSlot, Day)>>,
) -> impl IntoView {
    view! {
        <table class="schedule-grid">
            <thead>
                <tr>
                    <th></th>
                    {Day::ALL.iter().map(|day| view! { <th>{day.label()}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {TimeSlot::ALL
                    .into_iter()
                    .map(|slot| {
                        let schedule = schedule.clone();
                        view! {
                            <tr>
                                <th>{slot.label()}</th>
                                {Day::ALL
                                    .into_iter()
                                    .map(|day| {
                                        let schedule = schedule.clone();
                                        let available = move || schedule().is_available(slot, day);
                                        view! {
                                            <td>
                                                <button
                                                    type="button"
                                                    class="schedule-grid__cell"
                                                    class:schedule-grid__cell--on=available.clone()
                                                    aria-pressed=move || available().to_string()
                                                    disabled=on_toggle.is_none()
                                                    on:click=move |_| {
                                                        if let Some(toggle) = on_toggle {
                                                            toggle.run((slot, day));
                                                        }
                                                    }
                                                />
                                            </td>
                                        }
                                    })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn AvailabilityEditor() -> impl IntoView {
    let vm = SectionViewModel::<AvailabilitySection>::new(use_session());

    let viewing = move || view! {
        {view_row("Available from", move || vm.saved(|s| s.available_from.clone()))}
        {view_row("Notice period", move || vm.saved(|s| s.notice_period.clone()))}
        {view_row("Willing to travel", move || {
            vm.saved(|s| s.willing_to_travel.map(|t| if t { "Yes" } else { "No" }.to_string()))
        })}
        {view_row("Weekly slots", move || {
            vm.saved(|s| match s.weekly_schedule.available_cells() {
                0 => None,
                1 => Some("1 slot a week".to_string()),
                n => Some(format!("{} slots a week", n)),
            })
        })}
        {schedule_grid(move || vm.saved(|s| s.weekly_schedule.clone()), None)}
    };

    let editing = move || view! {
        <Input
            id="availableFrom"
            label="Available from"
            input_type="date"
            value=Signal::derive(move || vm.current(|s| s.available_from.clone().unwrap_or_default()))
            on_input=Callback::new(move |v: String| vm.edit(move |s| s.available_from = non_blank(v)))
            error=vm.field_error("availableFrom")
        />
        <Select
            id="noticePeriod"
            label="Notice period"
            placeholder="Choose"
            value=Signal::derive(move || vm.current(|s| s.notice_period.clone().unwrap_or_default()))
            options=plain_options(NOTICE_PERIODS.iter().copied())
            on_change=Callback::new(move |v: String| vm.edit(move |s| s.notice_period = non_blank(v)))
        />
        <Checkbox
            id="willingToTravel"
            label="Willing to travel"
            checked=Signal::derive(move || vm.current(|s| s.willing_to_travel.unwrap_or(false)))
            on_change=Callback::new(move |v: bool| vm.edit(move |s| s.willing_to_travel = Some(v)))
        />
        {schedule_grid(
            move || vm.current(|s| s.weekly_schedule.clone()),
            Some(Callback::new(move |(slot, day): (TimeSlot, Day)| {
                vm.edit(move |s| s.weekly_schedule.toggle(slot, day))
            })),
        )}
    };

    section_frame(vm, ViewFn::from(viewing), ViewFn::from(editing))
}
