use serde_json::Value;
use thiserror::Error;

/// Failure of a call to the data-quality service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),

    #[error("Request to {endpoint} timed out after {after_ms} ms")]
    TimedOut { endpoint: String, after_ms: u64 },
}

impl ApiError {
    /// Builds the error for a non-2xx response. The server `detail` field wins,
    /// then the status text, then the bare status code.
    pub fn from_http(status: u16, status_text: &str, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("detail").cloned())
            .and_then(|detail| match detail {
                Value::Null => None,
                Value::String(s) if s.trim().is_empty() => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            });
        let message = match detail {
            Some(detail) => detail,
            None if !status_text.trim().is_empty() => status_text.to_string(),
            None => format!("HTTP {status}"),
        };
        ApiError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detail_takes_precedence() {
        let err = ApiError::from_http(422, "Unprocessable Entity", r#"{"detail":"path not found"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "path not found".to_string()
            }
        );
        assert_eq!(err.to_string(), "path not found");
    }

    #[test]
    fn structured_detail_is_rendered_compactly() {
        let err = ApiError::from_http(422, "", r#"{"detail":[{"loc":["body","path"]}]}"#);
        assert_eq!(err.to_string(), r#"[{"loc":["body","path"]}]"#);
    }

    #[test]
    fn falls_back_to_status_text_then_code() {
        assert_eq!(
            ApiError::from_http(500, "Internal Server Error", "boom").to_string(),
            "Internal Server Error"
        );
        assert_eq!(ApiError::from_http(502, "", "").to_string(), "HTTP 502");
    }

    #[test]
    fn timeout_message() {
        let err = ApiError::TimedOut {
            endpoint: "/verify_code".to_string(),
            after_ms: 500,
        };
        assert_eq!(err.to_string(), "Request to /verify_code timed out after 500 ms");
    }
}
