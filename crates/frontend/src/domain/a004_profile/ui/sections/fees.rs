use contracts::domain::a004_profile::sections::{non_blank, parse_rate};
use contracts::domain::a004_profile::FeesSection;
use leptos::prelude::*;

use super::{section_frame, view_row};
use crate::domain::a004_profile::ui::view_model::SectionViewModel;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::system::auth::context::use_session;

fn money(rate: Option<f64>) -> Option<String> {
    rate.map(|r| format!("£{:.2}", r))
}

/// Rate input keeping the typed text; the draft only changes on a parseable amount
fn rate_input(
    vm: SectionViewModel<FeesSection>,
    key: &'static str,
    label: &'static str,
    get: fn(&FeesSection) -> Option<f64>,
    set: fn(&mut FeesSection, Option<f64>),
) -> impl IntoView {
    let text = RwSignal::new(vm.current(|s| get(s).map(|r| r.to_string()).unwrap_or_default()));
    let parse_error = RwSignal::new(None::<String>);
    let saved_error = vm.field_error(key);

    view! {
        <Input
            id=key
            label=label
            input_type="text"
            placeholder="0.00"
            value=text
            on_input=Callback::new(move |value: String| {
                match parse_rate(&value) {
                    Ok(rate) => {
                        parse_error.set(None);
                        vm.edit(move |s| set(s, rate));
                    }
                    Err(message) => parse_error.set(Some(message)),
                }
                text.set(value);
            })
            error=Signal::derive(move || parse_error.get().or_else(|| saved_error.get()))
        />
    }
}

#[component]
pub fn FeesEditor() -> impl IntoView {
    let vm = SectionViewModel::<FeesSection>::new(use_session());

    let viewing = move || view! {
        {view_row("Hourly rate", move || vm.saved(|s| money(s.hourly_rate)))}
        {view_row("Day rate", move || vm.saved(|s| money(s.day_rate)))}
        {view_row("Negotiable", move || {
            vm.saved(|s| s.negotiable.map(|n| if n { "Yes" } else { "No" }.to_string()))
        })}
        {view_row("Notes", move || vm.saved(|s| s.notes.clone()))}
    };

    let editing = move || view! {
        {rate_input(vm, "hourlyRate", "Hourly rate (£)", |s| s.hourly_rate, |s, v| s.hourly_rate = v)}
        {rate_input(vm, "dayRate", "Day rate (£)", |s| s.day_rate, |s, v| s.day_rate = v)}
        <Checkbox
            id="negotiable"
            label="Rates are negotiable"
            checked=Signal::derive(move || vm.current(|s| s.negotiable.unwrap_or(false)))
            on_change=Callback::new(move |v: bool| vm.edit(move |s| s.negotiable = Some(v)))
        />
        <Textarea
            id="feeNotes"
            label="Notes"
            value=Signal::derive(move || vm.current(|s| s.notes.clone().unwrap_or_default()))
            on_input=Callback::new(move |v: String| vm.edit(move |s| s.notes = non_blank(v)))
        />
    };

    section_frame(vm, ViewFn::from(viewing), ViewFn::from(editing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_format() {
        assert_eq!(money(Some(15.5)), Some("£15.50".to_string()));
        assert_eq!(money(None), None);
    }
}
