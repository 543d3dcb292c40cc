use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope wrapping every API payload.
///
/// Successful responses carry `success: true`, a human-readable message, and
/// the payload under `data`. Error responses reuse the same shape with
/// `success: false` and an optional machine-readable detail object.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Builds a successful envelope around `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Builds a successful envelope with no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Error body returned for failed requests.
///
/// Mirrors the success envelope so clients can parse one shape; `data`
/// carries recoverable detail such as `available_stock` on stock failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl ErrorDto {
    /// Builds an error body with no detail payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Builds an error body carrying a detail object.
    pub fn with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Some(data),
        }
    }
}
