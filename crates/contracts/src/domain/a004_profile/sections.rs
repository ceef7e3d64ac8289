use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schedule::WeeklySchedule;
use crate::shared::validation::{
    validate_email, validate_phone, validate_postcode_format, validate_website, FormErrors,
};
use crate::system::auth::LoginData;

pub const ABOUT_ME_MAX_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    BasicInfo,
    About,
    Availability,
    Fees,
    Contact,
    Services,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::BasicInfo => "Basic Info",
            SectionKind::About => "About",
            SectionKind::Availability => "Availability",
            SectionKind::Fees => "Fees",
            SectionKind::Contact => "Contact",
            SectionKind::Services => "Services",
        }
    }

    /// Key the section is nested under in profile payloads
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::BasicInfo => "basicInfo",
            SectionKind::About => "about",
            SectionKind::Availability => "availability",
            SectionKind::Fees => "fees",
            SectionKind::Contact => "contact",
            SectionKind::Services => "services",
        }
    }
}

/// One independently saved slice of the profile
pub trait ProfileSection: Clone + PartialEq + Default + Serialize {
    const KIND: SectionKind;

    /// Rules checked before a save is sent
    fn validate(&self) -> FormErrors {
        FormErrors::new()
    }

    /// Read the section out of the cached session snapshot
    fn from_login(data: &LoginData) -> Self;

    /// Write a saved section back into the cached session snapshot
    fn apply_to(&self, data: &mut LoginData);

    /// Request body for the section's endpoint
    fn to_payload(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            Self::KIND.key().to_string(),
            serde_json::to_value(self).unwrap_or(Value::Null),
        );
        Value::Object(body)
    }
}

/// Treat blank input as "not set"
pub fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Basic info (user record)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfoSection {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub screen_name: Option<String>,
    pub profile_photo: Option<String>,
}

impl ProfileSection for BasicInfoSection {
    const KIND: SectionKind = SectionKind::BasicInfo;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.first_name.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.insert("firstName", "First name is required");
        }
        errors
    }

    fn from_login(data: &LoginData) -> Self {
        Self {
            first_name: data.user.first_name.clone(),
            last_name: data.user.last_name.clone(),
            screen_name: data.user.screen_name.clone(),
            profile_photo: data.user.profile_photo.clone(),
        }
    }

    fn apply_to(&self, data: &mut LoginData) {
        data.user.first_name = self.first_name.clone();
        data.user.last_name = self.last_name.clone();
        data.user.screen_name = self.screen_name.clone();
        data.user.profile_photo = self.profile_photo.clone();
    }

    /// `/users/:id` takes the fields flat
    fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

// ============================================================================
// About
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutSection {
    pub headline: Option<String>,
    pub about_me: Option<String>,
    pub years_of_experience: Option<u32>,
}

impl ProfileSection for AboutSection {
    const KIND: SectionKind = SectionKind::About;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self
            .about_me
            .as_deref()
            .is_some_and(|s| s.chars().count() > ABOUT_ME_MAX_LEN)
        {
            errors.insert(
                "aboutMe",
                format!("Keep it under {} characters", ABOUT_ME_MAX_LEN),
            );
        }
        errors
    }

    fn from_login(data: &LoginData) -> Self {
        data.profile.about.clone()
    }

    fn apply_to(&self, data: &mut LoginData) {
        data.profile.about = self.clone();
    }
}

// ============================================================================
// Availability
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilitySection {
    pub available_from: Option<String>,
    pub notice_period: Option<String>,
    pub willing_to_travel: Option<bool>,
    pub weekly_schedule: WeeklySchedule,
}

impl ProfileSection for AvailabilitySection {
    const KIND: SectionKind = SectionKind::Availability;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if let Some(date) = self.available_from.as_deref() {
            if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                errors.insert("availableFrom", "Use the date picker to choose a date");
            }
        }
        errors
    }

    fn from_login(data: &LoginData) -> Self {
        data.profile.availability.clone()
    }

    fn apply_to(&self, data: &mut LoginData) {
        data.profile.availability = self.clone();
    }
}

// ============================================================================
// Fees
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeesSection {
    pub hourly_rate: Option<f64>,
    pub day_rate: Option<f64>,
    pub negotiable: Option<bool>,
    pub notes: Option<String>,
}

impl ProfileSection for FeesSection {
    const KIND: SectionKind = SectionKind::Fees;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.hourly_rate.is_some_and(|r| !r.is_finite() || r < 0.0) {
            errors.insert("hourlyRate", "Hourly rate must be a positive amount");
        }
        if self.day_rate.is_some_and(|r| !r.is_finite() || r < 0.0) {
            errors.insert("dayRate", "Day rate must be a positive amount");
        }
        errors
    }

    fn from_login(data: &LoginData) -> Self {
        data.profile.fees.clone()
    }

    fn apply_to(&self, data: &mut LoginData) {
        data.profile.fees = self.clone();
    }
}

/// Parse a money input; blank clears the field
pub fn parse_rate(input: &str) -> Result<Option<f64>, String> {
    let cleaned = input.trim().trim_start_matches('£').replace(',', "");
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| "Enter an amount, e.g. 15.50".to_string())
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
}

impl ProfileSection for ContactSection {
    const KIND: SectionKind = SectionKind::Contact;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if let Some(email) = self.email.as_deref() {
            errors.check("email", validate_email(email));
        }
        if let Some(phone) = self.phone_number.as_deref() {
            errors.check("phoneNumber", validate_phone(phone));
        }
        if let Some(postcode) = self.postcode.as_deref() {
            errors.check("postcode", validate_postcode_format(postcode));
        }
        if let Some(site) = self.website.as_deref() {
            errors.check("website", validate_website(site));
        }
        errors
    }

    fn from_login(data: &LoginData) -> Self {
        data.profile.contact.clone()
    }

    fn apply_to(&self, data: &mut LoginData) {
        data.profile.contact = self.clone();
    }
}

// ============================================================================
// Services
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesSection {
    pub services: Vec<String>,
}

impl ServicesSection {
    /// Add a service tag; duplicates (case-insensitive) and blanks are ignored
    pub fn add(&mut self, service: &str) -> bool {
        let service = service.trim();
        if service.is_empty()
            || self
                .services
                .iter()
                .any(|s| s.eq_ignore_ascii_case(service))
        {
            return false;
        }
        self.services.push(service.to_string());
        true
    }

    pub fn remove(&mut self, service: &str) {
        self.services.retain(|s| s != service);
    }
}

impl ProfileSection for ServicesSection {
    const KIND: SectionKind = SectionKind::Services;

    fn from_login(data: &LoginData) -> Self {
        data.profile.services.clone()
    }

    fn apply_to(&self, data: &mut LoginData) {
        data.profile.services = self.clone();
    }
}

// ============================================================================
// Whole profile, as cached
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub about: AboutSection,
    pub availability: AvailabilitySection,
    pub fees: FeesSection,
    pub contact: ContactSection,
    pub services: ServicesSection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{AccountRole, UserInfo};

    fn login() -> LoginData {
        LoginData {
            user: UserInfo {
                id: "u1".into(),
                email: "sam@example.com".into(),
                role: AccountRole::Individual,
                first_name: Some("Sam".into()),
                last_name: None,
                screen_name: None,
                profile_photo: None,
                phone_number: None,
            },
            profile: ProfileData::default(),
        }
    }

    #[test]
    fn test_section_payload_is_nested_under_key() {
        let about = AboutSection {
            about_me: Some("Licensed door supervisor".into()),
            ..Default::default()
        };
        let payload = about.to_payload();
        assert_eq!(payload["about"]["aboutMe"], "Licensed door supervisor");
    }

    #[test]
    fn test_basic_info_payload_is_flat() {
        let info = BasicInfoSection::from_login(&login());
        let payload = info.to_payload();
        assert_eq!(payload["firstName"], "Sam");
    }

    #[test]
    fn test_apply_to_updates_snapshot() {
        let mut data = login();
        let mut services = ServicesSection::default();
        services.add("Close Protection");
        services.apply_to(&mut data);
        assert_eq!(ServicesSection::from_login(&data), services);
    }

    #[test]
    fn test_services_add_dedupes() {
        let mut services = ServicesSection::default();
        assert!(services.add("CCTV"));
        assert!(!services.add("cctv"));
        assert!(!services.add("  "));
        services.remove("CCTV");
        assert!(services.services.is_empty());
    }

    #[test]
    fn test_fee_validation_and_parsing() {
        assert_eq!(parse_rate("£15.50").unwrap(), Some(15.5));
        assert_eq!(parse_rate("").unwrap(), None);
        assert!(parse_rate("fifteen").is_err());
        let fees = FeesSection {
            hourly_rate: Some(-1.0),
            ..Default::default()
        };
        assert!(fees.validate().contains("hourlyRate"));
    }

    #[test]
    fn test_contact_validation_skips_unset_fields() {
        assert!(ContactSection::default().validate().is_empty());
        let contact = ContactSection {
            website: Some("example".into()),
            email: Some("bad".into()),
            ..Default::default()
        };
        let errors = contact.validate();
        assert!(errors.contains("website"));
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_about_length_limit() {
        let about = AboutSection {
            about_me: Some("x".repeat(ABOUT_ME_MAX_LEN + 1)),
            ..Default::default()
        };
        assert!(about.validate().contains("aboutMe"));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  ".into()), None);
        assert_eq!(non_blank(" a ".into()).as_deref(), Some("a"));
    }
}
