//! Error types returned by the SDK.
//!
//! Failed API calls are classified by HTTP status the same way for every
//! endpoint. Variants that correspond to an HTTP exchange carry the full
//! [`Response`] so callers can inspect the API's `errors` array.

use thiserror::Error;

use crate::client::Response;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: no response (DNS, TLS, timeout, reset...) or a
    /// body that could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server announced JSON but the body could not be parsed
    #[error("Failed to parse response body ({})", .0.status_code)]
    Parser(Box<Response>),

    #[error("Server error ({}): {}", .0.status_code, .0.describe())]
    Server(Box<Response>),

    #[error("Authentication error ({}): {}", .0.status_code, .0.describe())]
    Authentication(Box<Response>),

    #[error("Resource not found ({}): {}", .0.status_code, .0.describe())]
    NotFound(Box<Response>),

    #[error("Client error ({}): {}", .0.status_code, .0.describe())]
    Client(Box<Response>),

    #[error("Unexpected response ({}): {}", .0.status_code, .0.describe())]
    Unknown(Box<Response>),

    /// `data` could not be deserialized into the requested type
    #[error("Failed to decode response data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Classify a response that did not succeed.
    ///
    /// Status takes precedence over parse failures: a 500 with a broken body
    /// is still a server error.
    pub fn from_response(response: Response) -> Self {
        let status = response.status_code;
        let response = Box::new(response);
        match status {
            500.. => Error::Server(response),
            401 => Error::Authentication(response),
            404 => Error::NotFound(response),
            400..=499 => Error::Client(response),
            _ if !response.parsed && response.is_json() && !response.body.trim().is_empty() => {
                Error::Parser(response)
            }
            _ => Error::Unknown(response),
        }
    }

    /// The response behind this error, if the server answered at all.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Parser(r)
            | Error::Server(r)
            | Error::Authentication(r)
            | Error::NotFound(r)
            | Error::Client(r)
            | Error::Unknown(r) => Some(r),
            Error::Network(_) | Error::Decode(_) | Error::Config(_) => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status_code)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Response {
        Response::from_parts(status, Some("application/json"), body.to_string())
    }

    #[test]
    fn test_classifies_server_errors() {
        let err = Error::from_response(response(503, "{}"));
        assert!(matches!(err, Error::Server(_)));
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_classifies_authentication() {
        let err = Error::from_response(response(401, "{}"));
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_classifies_not_found() {
        let err = Error::from_response(response(404, "{}"));
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_classifies_other_4xx_as_client() {
        for status in [400, 403, 429] {
            let err = Error::from_response(response(status, "{}"));
            assert!(matches!(err, Error::Client(_)), "status {}", status);
        }
    }

    #[test]
    fn test_status_wins_over_parse_failure() {
        let err = Error::from_response(response(500, "<html>oops</html>"));
        assert!(matches!(err, Error::Server(_)));
    }

    #[test]
    fn test_unparsable_success_is_parser_error() {
        let err = Error::from_response(response(200, "{not json"));
        assert!(matches!(err, Error::Parser(_)));
    }

    #[test]
    fn test_unexpected_status_is_unknown() {
        let err = Error::from_response(response(302, "{}"));
        assert!(matches!(err, Error::Unknown(_)));
    }

    #[test]
    fn test_message_includes_api_detail() {
        let body = r#"{"errors":[{"status":400,"code":477,"title":"INVALID FORMAT","detail":"latitude must be a number"}]}"#;
        let err = Error::from_response(response(400, body));
        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("latitude must be a number"));
    }

    #[test]
    fn test_config_error_has_no_response() {
        let err = Error::Config("missing client_id".to_string());
        assert!(err.response().is_none());
        assert_eq!(err.status_code(), None);
    }
}
