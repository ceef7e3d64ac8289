//! Field validation rules shared by every registration and profile form.
//!
//! All functions are pure: they take the raw input string and return either
//! the normalised value or a message fit to show next to the field.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use phonenumber::{country, Mode};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Standard outward/inward codes plus the non-geographic special formats
/// (Girobank, British Forces, overseas territories)
static POSTCODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}|GIR ?0AA|BFPO ?[0-9]{1,4}|[A-Z]{4} ?1ZZ)$")
        .expect("valid postcode regex")
});

static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+(:[0-9]+)?(/\S*)?$").expect("valid website regex")
});

/// Characters accepted as the "special" class of a password
pub const PASSWORD_SPECIALS: &[char] = &['.', '-', '_', '!', '@', '#', '$', '%', '^', '*'];

pub const PASSWORD_MIN_LEN: usize = 8;

/// Per-field error messages, keyed by the form's field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error map holding one field
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    /// Record the error of a field check, if any
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Outcome of a successful phone check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCheck {
    pub e164: String,
    pub international: String,
    /// ISO 3166-1 alpha-2 region detected from the number
    pub country: Option<String>,
}

impl PhoneCheck {
    /// Shown under the phone input once the number parses
    pub fn hint(&self) -> String {
        match &self.country {
            Some(country) => format!("{} ({})", self.international, country),
            None => self.international.clone(),
        }
    }
}

/// Which password rules an input satisfies; drives the strength hints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordRules {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordRules {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= PASSWORD_MIN_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| PASSWORD_SPECIALS.contains(&c)),
        }
    }

    pub fn all(&self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.digit && self.special
    }
}

pub fn validate_required(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn validate_email(email: &str) -> Result<String, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".into());
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Enter a valid email address".into());
    }
    Ok(email.to_string())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".into());
    }
    if !PasswordRules::evaluate(password).all() {
        return Err(format!(
            "Password must be at least {} characters and include upper and lower case letters, a number and one of . - _ ! @ # $ % ^ *",
            PASSWORD_MIN_LEN
        ));
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirm: &str) -> Result<(), String> {
    if confirm.is_empty() {
        return Err("Please confirm your password".into());
    }
    if password != confirm {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

/// Parse a phone number, assuming a UK number when no country code is given
pub fn validate_phone(input: &str) -> Result<PhoneCheck, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Phone number is required".into());
    }

    let number = phonenumber::parse(Some(country::Id::GB), input)
        .map_err(|_| "Enter a valid phone number".to_string())?;
    if !phonenumber::is_valid(&number) {
        return Err("Enter a valid phone number".into());
    }

    Ok(PhoneCheck {
        e164: number.format().mode(Mode::E164).to_string(),
        international: number.format().mode(Mode::International).to_string(),
        country: number.country().id().map(|id| format!("{:?}", id)),
    })
}

pub fn validate_website(input: &str) -> Result<String, String> {
    let site = input.trim();
    if !WEBSITE_RE.is_match(site) {
        return Err("Enter a full address, e.g. https://example.com".into());
    }
    Ok(site.to_string())
}

/// Uppercase and collapse inner whitespace to one space
pub fn normalize_postcode(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

/// Local shape check; the remote lookup still has the final say
pub fn validate_postcode_format(input: &str) -> Result<String, String> {
    let postcode = normalize_postcode(input);
    if postcode.is_empty() {
        return Err("Postcode is required".into());
    }
    if !POSTCODE_RE.is_match(&postcode) {
        return Err("Enter a valid UK postcode".into());
    }
    Ok(postcode)
}

/// Combine the three date-of-birth selects into `YYYY-MM-DD`
pub fn compose_date_of_birth(day: &str, month: &str, year: &str) -> Result<String, String> {
    if day.is_empty() || month.is_empty() || year.is_empty() {
        return Err("Please select your full date of birth".into());
    }
    let parse = |s: &str| s.trim().parse::<u32>().ok();
    let (Some(d), Some(m), Some(y)) = (parse(day), parse(month), parse(year)) else {
        return Err("Please select your full date of birth".into());
    };
    NaiveDate::from_ymd_opt(y as i32, m, d)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| "That date does not exist".to_string())
}

pub fn validate_terms(accepted: bool) -> Result<(), String> {
    if accepted {
        Ok(())
    } else {
        Err("You must accept the terms and conditions".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Abcdef1!").is_ok());
        assert!(validate_password("abcdefgh").is_err());
        assert!(validate_password("Abc1!").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_password_each_rule_is_required() {
        assert!(validate_password("ABCDEF1!").is_err()); // no lowercase
        assert!(validate_password("Abcdefg!").is_err()); // no digit
        assert!(validate_password("Abcdefg1").is_err()); // no special
        assert!(validate_password("Abcdef1?").is_err()); // '?' is not in the set
        assert!(validate_password("Abcdef1^").is_ok());
    }

    #[test]
    fn test_password_rules_report_partial_progress() {
        let rules = PasswordRules::evaluate("abc1");
        assert!(rules.lowercase && rules.digit);
        assert!(!rules.uppercase && !rules.special && !rules.min_length);
    }

    #[test]
    fn test_email() {
        assert_eq!(validate_email(" jo@example.co.uk ").unwrap(), "jo@example.co.uk");
        assert!(validate_email("").is_err());
        assert!(validate_email("jo@example").is_err());
        assert!(validate_email("jo example@x.com").is_err());
    }

    #[test]
    fn test_phone_uk_number() {
        let check = validate_phone("020 7946 0958").unwrap();
        assert_eq!(check.e164, "+442079460958");
        assert_eq!(check.country.as_deref(), Some("GB"));
        assert_eq!(check.international, "+44 20 7946 0958");
        assert_eq!(check.hint(), "+44 20 7946 0958 (GB)");
    }

    #[test]
    fn test_phone_invalid() {
        assert!(validate_phone("").is_err());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("not a number").is_err());
    }

    #[test]
    fn test_postcode_format() {
        assert_eq!(validate_postcode_format("sw1a   1aa").unwrap(), "SW1A 1AA");
        assert_eq!(validate_postcode_format("M1 1AE").unwrap(), "M1 1AE");
        assert!(validate_postcode_format("").is_err());
        assert!(validate_postcode_format("12345").is_err());
    }

    #[test]
    fn test_special_postcodes_pass_local_check() {
        assert_eq!(validate_postcode_format("gir 0aa").unwrap(), "GIR 0AA");
        assert_eq!(validate_postcode_format("BFPO 1234").unwrap(), "BFPO 1234");
        assert_eq!(validate_postcode_format("ASCN 1ZZ").unwrap(), "ASCN 1ZZ");
        assert!(validate_postcode_format("BFPO 12345").is_err());
        assert!(validate_postcode_format("NOT A CODE").is_err());
    }

    #[test]
    fn test_website() {
        assert!(validate_website("https://example.com").is_ok());
        assert!(validate_website("http://guards.example.co.uk/about?x=1").is_ok());
        assert!(validate_website("example").is_err());
        assert!(validate_website("ftp://example.com").is_err());
    }

    #[test]
    fn test_date_of_birth() {
        assert_eq!(compose_date_of_birth("5", "3", "1990").unwrap(), "1990-03-05");
        assert!(compose_date_of_birth("", "3", "1990").is_err());
        assert!(compose_date_of_birth("31", "2", "1990").is_err());
    }

    #[test]
    fn test_form_errors_collects_failures() {
        let mut errors = FormErrors::new();
        errors.check("email", validate_email("bad"));
        errors.check("password", validate_password("Abcdef1!"));
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("email"));
        assert!(errors.into_result().is_err());
    }
}
