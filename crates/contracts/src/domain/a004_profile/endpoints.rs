use super::sections::SectionKind;
use crate::system::auth::AccountRole;

/// `GET /auth/get-user/:id`
pub fn user_endpoint(user_id: &str) -> String {
    format!("/auth/get-user/{}", user_id)
}

/// Role-specific profile resource
pub fn role_profile_endpoint(role: AccountRole, user_id: &str) -> String {
    match role {
        AccountRole::Individual => format!("/profile/individual/{}", user_id),
        AccountRole::SecurityCompany => format!("/users/security-companies/{}", user_id),
        AccountRole::CourseProvider => format!("/users/course-providers/{}", user_id),
        AccountRole::CorporateClient => format!("/users/corporate-clients/{}", user_id),
    }
}

/// Resource a section is PUT to
pub fn section_endpoint(kind: SectionKind, role: AccountRole, user_id: &str) -> String {
    match kind {
        SectionKind::BasicInfo => format!("/users/{}", user_id),
        SectionKind::Contact => format!("/profile/{}", user_id),
        SectionKind::About | SectionKind::Availability | SectionKind::Fees | SectionKind::Services => {
            role_profile_endpoint(role, user_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_endpoints() {
        assert_eq!(
            section_endpoint(SectionKind::About, AccountRole::Individual, "42"),
            "/profile/individual/42"
        );
        assert_eq!(
            section_endpoint(SectionKind::Fees, AccountRole::SecurityCompany, "42"),
            "/users/security-companies/42"
        );
        assert_eq!(
            section_endpoint(SectionKind::Services, AccountRole::CourseProvider, "42"),
            "/users/course-providers/42"
        );
        assert_eq!(
            section_endpoint(SectionKind::Availability, AccountRole::CorporateClient, "42"),
            "/users/corporate-clients/42"
        );
        assert_eq!(
            section_endpoint(SectionKind::BasicInfo, AccountRole::CorporateClient, "42"),
            "/users/42"
        );
        assert_eq!(
            section_endpoint(SectionKind::Contact, AccountRole::Individual, "42"),
            "/profile/42"
        );
        assert_eq!(user_endpoint("42"), "/auth/get-user/42");
    }
}
