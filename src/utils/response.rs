//! Uniform response envelope returned by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Wrapper carrying the payload, a localized message, and the HTTP status
/// code of the operation's outcome.
///
/// The same shape is used on every path, including errors (with `data` set
/// to `null`), so clients can always read `message` and `status` from the
/// body.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: String, status: StatusCode) -> Self {
        Self {
            data,
            message,
            status: status.as_u16(),
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ApiResponse::new(vec![1, 2, 3], "ok".to_string(), StatusCode::OK);
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(body["message"], "ok");
        assert_eq!(body["status"], 200);
    }

    #[test]
    fn test_unit_data_serializes_as_null() {
        let response = ApiResponse::new((), "deleted".to_string(), StatusCode::NO_CONTENT);
        let body = serde_json::to_value(&response).unwrap();

        assert!(body["data"].is_null());
        assert_eq!(body["status"], 204);
    }
}
