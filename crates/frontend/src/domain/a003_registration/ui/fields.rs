use chrono::Datelike;
use contracts::domain::a003_registration::{DateOfBirth, RegistrationFields};
use contracts::shared::validation::PasswordRules;
use leptos::prelude::*;

use super::view_model::RegistrationViewModel;
use crate::shared::components::ui::{Checkbox, FieldError, Input, Select};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Youngest age accepted on the year select
const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 100;

/// Input bound to one string field of the form
pub fn text_field<F>(
    vm: RegistrationViewModel<F>,
    key: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&F) -> &String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: RegistrationFields + Send + Sync + 'static,
{
    view! {
        <Input
            id=key
            label=label
            input_type=input_type
            value=Signal::derive(move || vm.form.with(|f| get(f.fields()).clone()))
            on_input=Callback::new(move |value: String| vm.update(key, move |f| set(f, value)))
            on_blur=Callback::new(move |_| vm.touch(key))
            disabled=Signal::derive(move || vm.is_busy())
            error=vm.error_for(key)
        />
    }
}

fn day_options() -> Vec<(String, String)> {
    (1..=31).map(|d| (d.to_string(), d.to_string())).collect()
}

fn month_options() -> Vec<(String, String)> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, name)| ((i + 1).to_string(), name.to_string()))
        .collect()
}

fn year_options(current_year: i32) -> Vec<(String, String)> {
    ((current_year - MAX_AGE)..=(current_year - MIN_AGE))
        .rev()
        .map(|y| (y.to_string(), y.to_string()))
        .collect()
}

/// Day / month / year selects composed into one `dateOfBirth` field
pub fn date_of_birth_field<F>(
    vm: RegistrationViewModel<F>,
    get: fn(&F) -> &DateOfBirth,
    get_mut: fn(&mut F) -> &mut DateOfBirth,
) -> impl IntoView
where
    F: RegistrationFields + Send + Sync + 'static,
{
    const KEY: &str = "dateOfBirth";
    let part = move |pick: fn(&DateOfBirth) -> &String| {
        Signal::derive(move || vm.form.with(|f| pick(get(f.fields())).clone()))
    };
    let years = year_options(chrono::Local::now().year());

    view! {
        <fieldset class="form__group form__date-of-birth">
            <legend class="form__label">"Date of birth"</legend>
            <div class="form__row">
                <Select
                    id="dob-day"
                    placeholder="Day"
                    value=part(|d| &d.day)
                    options=day_options()
                    on_change=Callback::new(move |v: String| vm.update(KEY, move |f| get_mut(f).day = v))
                />
                <Select
                    id="dob-month"
                    placeholder="Month"
                    value=part(|d| &d.month)
                    options=month_options()
                    on_change=Callback::new(move |v: String| vm.update(KEY, move |f| get_mut(f).month = v))
                />
                <Select
                    id="dob-year"
                    placeholder="Year"
                    value=part(|d| &d.year)
                    options=years
                    on_change=Callback::new(move |v: String| vm.update(KEY, move |f| get_mut(f).year = v))
                />
            </div>
            <FieldError error=vm.error_for(KEY) />
        </fieldset>
    }
}

fn password_hints<F>(vm: RegistrationViewModel<F>) -> impl IntoView
where
    F: RegistrationFields + Send + Sync + 'static,
{
    let rules = Memo::new(move |_| vm.form.with(|f| PasswordRules::evaluate(&f.fields().account().password)));
    let hint = move |met: fn(&PasswordRules) -> bool, text: &'static str| {
        view! {
            <li class:password-hints__item--met=move || rules.with(met)>{text}</li>
        }
    };

    view! {
        <ul class="password-hints">
            {hint(|r| r.min_length, "At least 8 characters")}
            {hint(|r| r.uppercase, "An uppercase letter")}
            {hint(|r| r.lowercase, "A lowercase letter")}
            {hint(|r| r.digit, "A number")}
            {hint(|r| r.special, "One of . - _ ! @ # $ % ^ *")}
        </ul>
    }
}

/// Normalised number and detected country under the phone input
fn phone_hint<F>(vm: RegistrationViewModel<F>) -> impl IntoView
where
    F: RegistrationFields + Send + Sync + 'static,
{
    let hint = Memo::new(move |_| vm.form.with(|f| f.fields().account().phone().map(|p| p.hint())));
    move || hint.get().map(|text| view! { <p class="form__hint">{text}</p> })
}

/// Contact, credentials and terms: the block every account type ends with
pub fn account_fields<F>(vm: RegistrationViewModel<F>) -> impl IntoView
where
    F: RegistrationFields + Send + Sync + 'static,
{
    view! {
        {text_field(vm, "email", "Email", "email", |f| &f.account().email, |f, v| f.account_mut().email = v)}
        {text_field(vm, "phoneNumber", "Phone number", "tel", |f| &f.account().phone_number, |f, v| f.account_mut().phone_number = v)}
        {phone_hint(vm)}
        {text_field(vm, "address", "Address", "text", |f| &f.account().address, |f, v| f.account_mut().address = v)}
        {text_field(vm, "postcode", "Postcode", "text", |f| &f.account().postcode, |f, v| f.account_mut().postcode = v)}
        {text_field(vm, "password", "Password", "password", |f| &f.account().password, |f, v| f.account_mut().password = v)}
        {password_hints(vm)}
        {text_field(vm, "confirmPassword", "Confirm password", "password", |f| &f.account().confirm_password, |f, v| f.account_mut().confirm_password = v)}
        <Checkbox
            id="acceptTerms"
            label="I accept the terms and conditions"
            checked=Signal::derive(move || vm.form.with(|f| f.fields().account().accept_terms))
            on_change=Callback::new(move |v: bool| vm.update("acceptTerms", move |f| f.account_mut().accept_terms = v))
            error=vm.error_for("acceptTerms")
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_options_span() {
        let years = year_options(2026);
        assert_eq!(years.first().map(|(v, _)| v.as_str()), Some("2010"));
        assert_eq!(years.last().map(|(v, _)| v.as_str()), Some("1926"));
    }

    #[test]
    fn test_month_values_are_one_based() {
        let months = month_options();
        assert_eq!(months[0], ("1".to_string(), "January".to_string()));
        assert_eq!(months.len(), 12);
    }
}
