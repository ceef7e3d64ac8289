use serde::{Deserialize, Serialize};

use crate::domain::a004_profile::ProfileData;

/// Marketplace account type; decides which registration form, profile
/// endpoint and payload shape apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    #[default]
    #[serde(alias = "client", alias = "professional")]
    Individual,
    #[serde(alias = "security-company")]
    SecurityCompany,
    #[serde(alias = "course-provider")]
    CourseProvider,
    #[serde(alias = "corporate")]
    CorporateClient,
}

impl AccountRole {
    pub fn label(&self) -> &'static str {
        match self {
            AccountRole::Individual => "Individual",
            AccountRole::SecurityCompany => "Security Company",
            AccountRole::CourseProvider => "Course Provider",
            AccountRole::CorporateClient => "Corporate Client",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: AccountRole,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        if let Some(screen) = self.screen_name.as_deref().filter(|s| !s.is_empty()) {
            return screen.to_string();
        }
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.email.clone()
        } else {
            full
        }
    }
}

/// Cached session snapshot kept under `loginData`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: UserInfo,
    #[serde(default)]
    pub profile: ProfileData,
}

/// `GET /auth/get-user/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserResponse {
    pub user: UserInfo,
    #[serde(default)]
    pub profile: Option<ProfileData>,
}

impl GetUserResponse {
    pub fn into_login_data(self) -> LoginData {
        LoginData {
            user: self.user,
            profile: self.profile.unwrap_or_default(),
        }
    }
}
