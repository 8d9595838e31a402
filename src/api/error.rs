//! Error handling for the backend API client

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http {
        status: u16,
        message: String,
        /// Human-readable `detail` field of the error body, when present.
        detail: Option<String>,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

impl RequestError {
    pub async fn from_response(response: reqwest::Response) -> RequestError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        RequestError::from_status_and_body(status, message)
    }

    /// Builds an HTTP error, extracting the `detail` field from a JSON body.
    pub fn from_status_and_body(status: u16, body: impl Into<String>) -> RequestError {
        let message = body.into();
        let detail = serde_json::from_str::<ErrorBody>(&message)
            .ok()
            .and_then(|body| detail_text(body.detail));

        RequestError::Http {
            status,
            message,
            detail,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            RequestError::Reqwest(e) => e.status().map(|status| status.as_u16()),
            RequestError::Decode(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            RequestError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message suitable for an inline alert: the server detail if any,
    /// otherwise a generic description of the failure.
    pub fn user_message(&self) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        match self {
            RequestError::Http { status, .. } => {
                format!("Request failed with status code {}", status)
            }
            RequestError::Reqwest(_) => "Network Error".to_string(),
            RequestError::Decode(_) => "Invalid response from server".to_string(),
        }
    }
}

/// FastAPI reports either a plain string or, for validation failures, a list
/// of `{loc, msg, type}` objects.
fn detail_text(detail: Value) -> Option<String> {
    let text = match detail {
        Value::Null => return None,
        Value::String(text) => text,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}
