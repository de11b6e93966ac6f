use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::IdEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product id must not be empty".to_string(),
            ),
            ProductError::NegativeQuantity { field } => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                format!("{} must not be negative", field),
            ),
            ProductError::InvalidPurchaseQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Purchase quantity must be positive".to_string(),
            ),
            ProductError::AlreadyExists => (
                StatusCode::BAD_REQUEST,
                "Conflict",
                "Product already exists".to_string(),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Product not found".to_string(),
            ),
            ProductError::InsufficientStock => (
                StatusCode::BAD_REQUEST,
                "InsufficientStock",
                "Not enough stock".to_string(),
            ),
            ProductError::OnlyLowPriorityRestock => (
                StatusCode::BAD_REQUEST,
                "InvalidOperation",
                "Only low-priority products can be manually restocked.".to_string(),
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageUnavailable",
                "Inventory storage is unavailable".to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_business_rule_errors_to_client_errors() {
        let (status, body) = ProductError::AlreadyExists.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "Conflict");

        let (status, body) = ProductError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "Product not found");

        let (status, body) = ProductError::OnlyLowPriorityRestock.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "InvalidOperation");
    }

    #[test]
    fn should_name_the_offending_field() {
        let (_, body) = ProductError::NegativeQuantity {
            field: "min_threshold",
        }
        .into_error_response();

        assert_eq!(body.0.message, "min_threshold must not be negative");
    }

    #[test]
    fn should_map_storage_failure_to_server_error() {
        let (status, body) =
            ProductError::Repository(RepositoryError::StorageUnavailable).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.name, "StorageUnavailable");
    }
}
