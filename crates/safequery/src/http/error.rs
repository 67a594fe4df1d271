/*
[INPUT]:  Failure sources (HTTP status responses, transport errors, URL and decode errors)
[OUTPUT]: One normalized error type with message, details and status
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new failure sources or changing error messages
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message used when a request was sent but nothing came back
pub const NO_RESPONSE_MESSAGE: &str = "No response received from server";

/// Message used when a failure carries nothing usable
pub const UNKNOWN_MESSAGE: &str = "An unknown error occurred";

/// Main error type for SafeQuery
///
/// Every failure a request can hit resolves to exactly one variant. Callers who
/// only care about the flat shape can use [`message`](Self::message),
/// [`details`](Self::details) and [`status`](Self::status).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SafeQueryError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// A request went out but no response arrived (timeout, refused, DNS)
    #[error("{message}")]
    Unreachable { message: String },

    /// Failed locally: bad URL, client setup, undecodable body
    #[error("{message}")]
    Setup { message: String },

    #[error("An unknown error occurred")]
    Unknown,
}

impl SafeQueryError {
    pub fn message(&self) -> &str {
        match self {
            SafeQueryError::Server { message, .. }
            | SafeQueryError::Unreachable { message }
            | SafeQueryError::Setup { message } => message,
            SafeQueryError::Unknown => UNKNOWN_MESSAGE,
        }
    }

    /// Details reported by the server alongside its error
    pub fn details(&self) -> Option<&str> {
        match self {
            SafeQueryError::Server { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// HTTP status, present only when the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            SafeQueryError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, SafeQueryError::Server { .. })
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, SafeQueryError::Unreachable { .. })
    }

    /// Map a raw failure to its variant. Order of the arms is the precedence.
    pub(crate) fn from_failure(failure: Failure) -> Self {
        match failure {
            Failure::Response { status, body } => {
                let parsed = serde_json::from_str::<Value>(&body).ok();
                let message = string_field(parsed.as_ref(), "error")
                    .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));
                SafeQueryError::Server {
                    status: status.as_u16(),
                    message,
                    details: string_field(parsed.as_ref(), "details"),
                }
            }
            Failure::NoResponse => SafeQueryError::Unreachable {
                message: NO_RESPONSE_MESSAGE.to_string(),
            },
            Failure::Message(message) => SafeQueryError::Setup { message },
            Failure::Unknown => SafeQueryError::Unknown,
        }
    }
}

fn string_field(body: Option<&Value>, name: &str) -> Option<String> {
    body.and_then(|value| value.get(name))
        .and_then(Value::as_str)
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
}

/// Raw failure, classified but not yet normalized
#[derive(Debug)]
pub(crate) enum Failure {
    Response { status: StatusCode, body: String },
    NoResponse,
    Message(String),
    Unknown,
}

impl Failure {
    fn from_message(message: String) -> Self {
        if message.is_empty() {
            Failure::Unknown
        } else {
            Failure::Message(message)
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Failure::Response { .. } => "response",
            Failure::NoResponse => "no_response",
            Failure::Message(_) => "message",
            Failure::Unknown => "unknown",
        }
    }
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            Failure::NoResponse
        } else {
            Failure::from_message(err.to_string())
        }
    }
}

impl From<url::ParseError> for Failure {
    fn from(err: url::ParseError) -> Self {
        Failure::from_message(format!("Invalid URL: {err}"))
    }
}

impl From<serde_json::Error> for Failure {
    fn from(err: serde_json::Error) -> Self {
        Failure::from_message(format!("error decoding response body: {err}"))
    }
}

/// Result type alias for SafeQuery operations
pub type Result<T> = std::result::Result<T, SafeQueryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn response(status: StatusCode, body: &str) -> Failure {
        Failure::Response {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_server_error_with_error_and_details() {
        let err = SafeQueryError::from_failure(response(
            StatusCode::NOT_FOUND,
            r#"{"error":"X","details":"Y"}"#,
        ));

        assert_eq!(err.message(), "X");
        assert_eq!(err.details(), Some("Y"));
        assert_eq!(err.status(), Some(404));
        assert!(err.is_server_error());
        assert_eq!(err.to_string(), "X");
    }

    #[rstest]
    #[case::empty_body("")]
    #[case::not_json("<html>bad gateway</html>")]
    #[case::no_error_field(r#"{"message":"nope"}"#)]
    #[case::empty_error(r#"{"error":""}"#)]
    #[case::non_string_error(r#"{"error":42}"#)]
    fn test_server_error_falls_back_to_status_message(#[case] body: &str) {
        let err = SafeQueryError::from_failure(response(StatusCode::BAD_GATEWAY, body));

        assert_eq!(err.message(), "API Error: 502");
        assert_eq!(err.details(), None);
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_server_error_ignores_empty_details() {
        let err = SafeQueryError::from_failure(response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"Invalid mint address","details":""}"#,
        ));

        assert_eq!(err.message(), "Invalid mint address");
        assert_eq!(err.details(), None);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_details_kept_without_error_field() {
        let err = SafeQueryError::from_failure(response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"details":"upstream timed out"}"#,
        ));

        assert_eq!(err.message(), "API Error: 500");
        assert_eq!(err.details(), Some("upstream timed out"));
    }

    #[test]
    fn test_no_response_has_no_status() {
        let err = SafeQueryError::from_failure(Failure::NoResponse);

        assert_eq!(err.message(), NO_RESPONSE_MESSAGE);
        assert_eq!(err.status(), None);
        assert_eq!(err.details(), None);
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_message_used_verbatim() {
        let failure = Failure::from(url::ParseError::RelativeUrlWithoutBase);
        let err = SafeQueryError::from_failure(failure);

        assert!(matches!(err, SafeQueryError::Setup { .. }));
        assert_eq!(err.message(), "Invalid URL: relative URL without a base");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_decode_failure_is_setup_error() {
        let decode_err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err = SafeQueryError::from_failure(Failure::from(decode_err));

        assert!(matches!(err, SafeQueryError::Setup { .. }));
        assert!(err.message().starts_with("error decoding response body: "));
    }

    #[test]
    fn test_empty_message_is_unknown() {
        let err = SafeQueryError::from_failure(Failure::from_message(String::new()));

        assert_eq!(err, SafeQueryError::Unknown);
        assert_eq!(err.message(), UNKNOWN_MESSAGE);
        assert_eq!(err.to_string(), UNKNOWN_MESSAGE);
        assert_eq!(err.status(), None);
    }
}
