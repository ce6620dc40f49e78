// API client errors

use serde_json::Value;
use ten_navigator_core::ValidationError;

/// Message for failures where no HTTP response was received
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error or server unreachable. Please check your internet connection or try again later.";

pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many requests. Please try again later.";
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication failed. Invalid API Key.";
pub const FORBIDDEN_MESSAGE: &str = "Access denied.";

/// API client error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Decoded response body
        data: Value,
    },

    /// No response was received (DNS, connection refused, reset...)
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// The response body was not the expected JSON
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized
    #[error("failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid header: {name}")]
    InvalidHeader { name: String },

    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ApiError {
    /// Build an HTTP error with the user-facing message derived from the body
    pub fn http(status: u16, data: Value) -> Self {
        ApiError::Http {
            status,
            message: http_error_message(status, &data),
            data,
        }
    }

    /// HTTP status, present only for [`ApiError::Http`]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded response body, present only for [`ApiError::Http`]
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiError::Http { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network)
    }
}

/// Human-readable message for a non-2xx response.
///
/// `"API Error: <status> - <detail | error_message | Unknown error>"`, except
/// for 429, 401 and 403 which have fixed messages.
pub fn http_error_message(status: u16, data: &Value) -> String {
    match status {
        429 => return TOO_MANY_REQUESTS_MESSAGE.to_string(),
        401 => return UNAUTHORIZED_MESSAGE.to_string(),
        403 => return FORBIDDEN_MESSAGE.to_string(),
        _ => {}
    }

    let reason = present_field(data, "detail")
        .or_else(|| present_field(data, "error_message"))
        .map(display_value)
        .unwrap_or_else(|| "Unknown error".to_string());

    format!("API Error: {} - {}", status, reason)
}

/// Field value if set to something other than null, false, 0 or ""
fn present_field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Strings as-is, everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================
    // http_error_message
    // ========================================

    #[test]
    fn test_message_with_string_detail() {
        assert_eq!(
            http_error_message(500, &json!({"detail": "db down"})),
            "API Error: 500 - db down"
        );
    }

    #[test]
    fn test_message_with_structured_detail() {
        // Validation errors arrive as a list of objects
        let data = json!({"detail": [{"loc": ["body", "startup_name"], "msg": "field required"}]});
        assert_eq!(
            http_error_message(422, &data),
            r#"API Error: 422 - [{"loc":["body","startup_name"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn test_message_falls_back_to_error_message() {
        assert_eq!(
            http_error_message(502, &json!({"error_message": "upstream failed"})),
            "API Error: 502 - upstream failed"
        );
    }

    #[test]
    fn test_structured_error_message_is_json() {
        let data = json!({"error_message": {"a": 1}});
        assert_eq!(http_error_message(500, &data), r#"API Error: 500 - {"a":1}"#);
    }

    #[test]
    fn test_detail_wins_over_error_message() {
        let data = json!({"detail": "first", "error_message": "second"});
        assert_eq!(http_error_message(500, &data), "API Error: 500 - first");
    }

    #[test]
    fn test_empty_detail_is_ignored() {
        let data = json!({"detail": "", "error_message": "second"});
        assert_eq!(http_error_message(500, &data), "API Error: 500 - second");
    }

    #[test]
    fn test_message_unknown_error() {
        assert_eq!(http_error_message(500, &json!({})), "API Error: 500 - Unknown error");
        assert_eq!(http_error_message(404, &json!([1, 2])), "API Error: 404 - Unknown error");
        assert_eq!(http_error_message(500, &Value::Null), "API Error: 500 - Unknown error");
    }

    #[test]
    fn test_status_overrides_replace_message() {
        let data = json!({"detail": "ignored"});
        assert_eq!(http_error_message(429, &data), TOO_MANY_REQUESTS_MESSAGE);
        assert_eq!(http_error_message(401, &data), UNAUTHORIZED_MESSAGE);
        assert_eq!(http_error_message(403, &data), FORBIDDEN_MESSAGE);
    }

    // ========================================
    // ApiError
    // ========================================

    #[test]
    fn test_http_error_carries_status_and_data() {
        let error = ApiError::http(500, json!({"detail": "db down"}));

        assert_eq!(error.to_string(), "API Error: 500 - db down");
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.data(), Some(&json!({"detail": "db down"})));
        assert!(!error.is_network());
    }

    #[test]
    fn test_network_error_has_no_status_or_data() {
        let error = ApiError::Network;

        assert_eq!(error.to_string(), NETWORK_ERROR_MESSAGE);
        assert_eq!(error.status(), None);
        assert!(error.data().is_none());
        assert!(error.is_network());
    }

    #[test]
    fn test_validation_error_display() {
        let error = ApiError::from(ValidationError::NotPositive("market_size_usd"));
        assert_eq!(
            error.to_string(),
            "invalid request: market_size_usd must be greater than zero"
        );
    }
}
