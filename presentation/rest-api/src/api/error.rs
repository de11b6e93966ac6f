use poem::http::StatusCode;
use poem_openapi::{Object, error::ParseRequestPayloadError, payload::Json};

/// Error body shared by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. "NotFound" or "InsufficientStock"
    pub name: String,
    /// Human-readable explanation
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Request bodies poem-openapi could not decode, in the shared error shape.
pub async fn payload_error_response(
    err: ParseRequestPayloadError,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("ValidationError", err.reason)),
    )
}
