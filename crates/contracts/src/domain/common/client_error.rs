use serde::Deserialize;
use thiserror::Error;

use crate::shared::validation::FormErrors;

/// Result of any client-side operation that can fail in a user-visible way
pub type ClientResult<T> = Result<T, ClientError>;

/// Error taxonomy of the marketplace client.
///
/// Every variant is locally recoverable: the UI either shows the message
/// inline / as a toast, or redirects to sign-in.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Missing or malformed fields; shown next to the fields
    #[error("please correct the highlighted fields")]
    Validation(FormErrors),

    /// External postcode service rejected the postcode
    #[error("\"{0}\" is not a valid UK postcode")]
    InvalidPostcode(String),

    /// Transport failure (DNS, offline, CORS, timeout); the user may retry
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status, with the server message when one was sent
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Protected action attempted without a session token
    #[error("please sign in to continue")]
    Unauthenticated,

    /// The same action is still waiting on its previous request
    #[error("still saving, please wait")]
    InFlight,
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Build an API error from a raw response body, preferring the
    /// `message` / `error` field the backend sends when it has one.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
            error: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        if status == 401 {
            return Self::Unauthenticated;
        }
        Self::api(status, message)
    }

    /// Whether re-issuing the same request could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Whether the UI should send the user to sign-in instead of a toast
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Text for a toast
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_prefers_server_message() {
        let err = ClientError::from_response(400, r#"{"message":"Email already registered"}"#);
        assert_eq!(err, ClientError::api(400, "Email already registered"));
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_from_response_falls_back_to_status() {
        let err = ClientError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_unauthorized_maps_to_sign_in() {
        let err = ClientError::from_response(401, r#"{"error":"jwt expired"}"#);
        assert!(err.requires_sign_in());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_network_is_retryable() {
        let err = ClientError::network("Failed to fetch");
        assert!(err.is_retryable());
        assert_eq!(
            err.user_message(),
            "Could not reach the server. Check your connection and try again."
        );
    }
}
