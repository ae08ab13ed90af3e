//! Mobile API response envelope.
//!
//! Every endpoint answers with the same envelope: an HTTP-style status
//! code, a human-readable message, and an optional data payload. Errors
//! are folded into the envelope rather than aborting the request.

use serde::Serialize;

use crate::AppError;

/// Standard API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// HTTP-style status code echoed in the body.
    pub status_code: u16,
    /// Human-readable outcome description.
    pub message: String,
    /// Payload, omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response from an application error.
    pub fn err(error: &AppError) -> ApiResponse<()> {
        let code = error.error_code();
        if error.is_server_error() {
            tracing::error!(error = %error, code = code, "Server error occurred");
        } else {
            tracing::debug!(error = %error, code = code, "Client error occurred");
        }

        ApiResponse {
            status_code: error.status_code(),
            message: error.to_string(),
            data: None,
        }
    }
}
