//! Shared response envelope for API handlers.
//!
//! Every response body, successful or not, is `{ success, message, data }`.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` bodies.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard `{ "success": bool, "message": String, "data": T | null }` envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok("Retrieved all categories", categories)))
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// A failure envelope with `data: null`.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
