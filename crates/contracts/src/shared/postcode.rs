//! Wire types for the postcodes.io validation service

use serde::{Deserialize, Serialize};

/// Verdict of the external postcode service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostcodeStatus {
    Valid,
    Invalid,
}

impl PostcodeStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, PostcodeStatus::Valid)
    }
}

/// `GET /postcodes/:postcode/validate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub status: u16,
    pub result: bool,
}

impl ValidateResponse {
    pub fn status(&self) -> PostcodeStatus {
        if self.status == 200 && self.result {
            PostcodeStatus::Valid
        } else {
            PostcodeStatus::Invalid
        }
    }
}

pub fn validate_url(base: &str, postcode: &str) -> String {
    format!(
        "{}/postcodes/{}/validate",
        base.trim_end_matches('/'),
        encode_segment(postcode)
    )
}

fn encode_segment(postcode: &str) -> String {
    urlencoding::encode(postcode.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_response() {
        let ok: ValidateResponse = serde_json::from_str(r#"{"status":200,"result":true}"#).unwrap();
        assert_eq!(ok.status(), PostcodeStatus::Valid);
        let bad: ValidateResponse =
            serde_json::from_str(r#"{"status":200,"result":false}"#).unwrap();
        assert_eq!(bad.status(), PostcodeStatus::Invalid);
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            validate_url("https://api.postcodes.io/", "SW1A 1AA"),
            "https://api.postcodes.io/postcodes/SW1A%201AA/validate"
        );
        assert_eq!(
            validate_url("https://api.postcodes.io", " M1 1AE "),
            "https://api.postcodes.io/postcodes/M1%201AE/validate"
        );
    }
}
