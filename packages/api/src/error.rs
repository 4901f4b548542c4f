//! Errors returned by the remote profile API.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// 401/403: the session is invalid or the supplied credentials were wrong
    /// (e.g. the current password on a password change).
    #[error("{0}")]
    Auth(String),

    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },

    /// The response arrived but its body could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message supplied by the server, if there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Auth(message) => Some(message),
            ApiError::Server {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Build an error from a non-success status and the raw response body.
    ///
    /// Bodies shaped `{"message": ...}` or `{"error": ...}` contribute their text.
    pub fn from_status(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
            error: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());

        match status {
            401 | 403 => ApiError::Auth(message.unwrap_or_else(|| "Not authorized".to_string())),
            _ => ApiError::Server { status, message },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_status_uses_server_message() {
        let err = ApiError::from_status(401, r#"{"message": "Current password is incorrect"}"#);
        assert!(matches!(err, ApiError::Auth(_)));
        assert_eq!(err.server_message(), Some("Current password is incorrect"));
        assert_eq!(err.to_string(), "Current password is incorrect");
    }

    #[test]
    fn test_auth_status_without_body() {
        let err = ApiError::from_status(403, "");
        assert_eq!(err.server_message(), Some("Not authorized"));
    }

    #[test]
    fn test_server_error_field() {
        let err = ApiError::from_status(422, r#"{"error": "name too long"}"#);
        assert_eq!(err.server_message(), Some("name too long"));
        assert_eq!(err.to_string(), "server returned 422: name too long");
    }

    #[test]
    fn test_server_error_plain_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert!(err.server_message().is_none());
        assert_eq!(err.to_string(), "server returned 502: no details");
    }

    #[test]
    fn test_network_has_no_server_message() {
        assert!(ApiError::Network("offline".into()).server_message().is_none());
    }
}
