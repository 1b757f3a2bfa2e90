//! Error taxonomy for API traffic.
//!
//! Errors are `Clone` so a single failed refresh can be shared by every
//! request that was waiting on it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of an API call, from the caller's point of view.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure; the request never produced a status.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The session could not be refreshed; distinguishes "your session is
    /// gone" from "your original request failed".
    #[error("session expired: {0}")]
    SessionExpired(String),

    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// SSR stub: network calls are only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Extract the server's human-readable message from an error body,
/// preferring `msg` over `error` (the API uses both keys).
pub(crate) fn server_message(status: u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            v.get("msg")
                .or_else(|| v.get("error"))
                .and_then(serde_json::Value::as_str)
        })
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
