use reqwest::StatusCode;
use thiserror::Error;
use verita_core::error::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", detail_or_body(.detail, .body))]
    Status {
        status: StatusCode,
        detail: Option<String>,
        body: String,
    },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("Token storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Build a status error from a response body, extracting the server's
    /// `detail` message when the body carries one.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let detail = extract_detail(&body);
        ApiError::Status {
            status,
            detail,
            body,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    /// Human-readable server message, if the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

fn detail_or_body<'a>(detail: &'a Option<String>, body: &'a str) -> &'a str {
    detail.as_deref().unwrap_or(body)
}

/// Pull `detail` out of an error body.
///
/// A plain string is returned as is. Validation errors arrive as a list of
/// `{loc, msg}` objects; their messages are joined with "; ".
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
