use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;

/// Body of a failed response, decoded as far as it would go.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
}

impl ErrorBody {
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(raw),
        }
    }

    /// Human readable message: the `error` or `message` field of a JSON body,
    /// otherwise the body itself. `None` when the body was empty.
    pub fn message(&self) -> Option<String> {
        match self {
            ErrorBody::Json(Value::Object(fields)) => text_field(fields, "error")
                .or_else(|| text_field(fields, "message"))
                .map(str::to_string)
                .or_else(|| Some(Value::Object(fields.clone()).to_string())),
            ErrorBody::Json(Value::String(text)) => Some(text.clone()),
            ErrorBody::Json(value) => Some(value.to_string()),
            ErrorBody::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
        }
    }
}

// A null or blank field counts as missing
fn text_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

fn http_message(status: &u16, body: &ErrorBody) -> String {
    body.message()
        .unwrap_or_else(|| format!("Backend returned HTTP {}", status))
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{}", http_message(.status, .body))]
    Http { status: u16, body: ErrorBody },

    #[error("Request timed out after {} seconds", .0.as_secs_f32())]
    TimedOut(Duration),

    #[error("Invalid response format: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_error_field_wins() {
        let body = ErrorBody::parse(r#"{"error": "bad url", "message": "ignored"}"#.to_string());
        assert_eq!(body, ErrorBody::Json(json!({"error": "bad url", "message": "ignored"})));
        assert_eq!(body.message().as_deref(), Some("bad url"));
    }

    #[test]
    fn test_json_message_field_is_used_without_error() {
        let body = ErrorBody::parse(r#"{"message": "yt-dlp exploded"}"#.to_string());
        assert_eq!(body.message().as_deref(), Some("yt-dlp exploded"));
    }

    #[test]
    fn test_null_or_blank_error_falls_through_to_message() {
        let body =
            ErrorBody::parse(r#"{"error": null, "message": "Video unavailable"}"#.to_string());
        assert_eq!(body.message().as_deref(), Some("Video unavailable"));

        let body = ErrorBody::parse(r#"{"error": "  ", "message": "Video unavailable"}"#.to_string());
        assert_eq!(body.message().as_deref(), Some("Video unavailable"));
    }

    #[test]
    fn test_blank_error_without_message_shows_body() {
        let body = ErrorBody::parse(r#"{"error": ""}"#.to_string());
        assert_eq!(body.message().as_deref(), Some(r#"{"error":""}"#));
    }

    #[test]
    fn test_json_without_known_fields_is_rendered() {
        let body = ErrorBody::parse(r#"{"detail": 3}"#.to_string());
        assert_eq!(body.message().as_deref(), Some(r#"{"detail":3}"#));
    }

    #[test]
    fn test_plain_text_falls_back_to_raw_body() {
        let body = ErrorBody::parse("<h1>502 Bad Gateway</h1>".to_string());
        assert_eq!(body, ErrorBody::Text("<h1>502 Bad Gateway</h1>".to_string()));
        assert_eq!(body.message().as_deref(), Some("<h1>502 Bad Gateway</h1>"));
    }

    #[test]
    fn test_empty_body_reports_status() {
        let err = ApiError::Http {
            status: 500,
            body: ErrorBody::parse(String::new()),
        };
        assert_eq!(err.to_string(), "Backend returned HTTP 500");
    }

    #[test]
    fn test_sub_second_timeout_is_not_rounded_away() {
        let err = ApiError::TimedOut(Duration::from_millis(200));
        assert_eq!(err.to_string(), "Request timed out after 0.2 seconds");

        let err = ApiError::TimedOut(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Request timed out after 10 seconds");
    }

    #[test]
    fn test_http_error_displays_backend_message() {
        let err = ApiError::Http {
            status: 400,
            body: ErrorBody::parse(r#"{"error": "URL is required"}"#.to_string()),
        };
        assert_eq!(err.to_string(), "URL is required");
    }
}
