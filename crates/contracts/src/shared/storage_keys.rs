//! Local storage keys shared between the session store and the pages that
//! warm-start from it.

use crate::domain::common::{ClientError, ClientResult};

/// Bearer token, sometimes stored JSON-quoted by older clients
pub const AUTH_TOKEN: &str = "authToken";
/// Cached user + profile snapshot
pub const LOGIN_DATA: &str = "loginData";
/// Profile snapshot of the last viewed profile
pub const PROFILE_DATA: &str = "profileData";
/// Last submitted search selection
pub const SEARCH_VALUES: &str = "searchValues";
/// `basic` / `advanced`
pub const SEARCH_MODE: &str = "searchMode";
/// Taxonomy title the last search was run against
pub const SEARCH_TITLE: &str = "title";

/// Strip the quote characters a token picks up when stored via
/// `JSON.stringify`, plus stray whitespace.
pub fn strip_token_quotes(raw: &str) -> Option<String> {
    let token = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if token.is_empty() || token == "null" || token == "undefined" {
        None
    } else {
        Some(token.to_string())
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// `Authorization` header for a protected call; no token means sign-in
pub fn authorization(token: Option<&str>) -> ClientResult<String> {
    token
        .and_then(strip_token_quotes)
        .map(|token| bearer(&token))
        .ok_or(ClientError::Unauthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_token_quotes() {
        assert_eq!(strip_token_quotes("\"abc.def\"").as_deref(), Some("abc.def"));
        assert_eq!(strip_token_quotes("abc").as_deref(), Some("abc"));
        assert_eq!(strip_token_quotes(" 'abc' ").as_deref(), Some("abc"));
    }

    #[test]
    fn test_empty_tokens_are_absent() {
        assert_eq!(strip_token_quotes(""), None);
        assert_eq!(strip_token_quotes("\"\""), None);
        assert_eq!(strip_token_quotes("null"), None);
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("t0k"), "Bearer t0k");
    }

    #[test]
    fn test_authorization_requires_token() {
        assert_eq!(authorization(Some("\"t0k\"")).unwrap(), "Bearer t0k");
        assert_eq!(authorization(None), Err(ClientError::Unauthenticated));
        assert_eq!(authorization(Some("null")), Err(ClientError::Unauthenticated));
    }
}
