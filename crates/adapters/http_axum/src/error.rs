//! HTTP error response mapping.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use restomap_domain::error::{FieldFailure, RestoMapError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    /// Failure messages keyed by request field.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    errors: BTreeMap<&'static str, Vec<String>>,
}

/// Maps [`RestoMapError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RestoMapError);

impl ApiError {
    /// A request field that could not be bound at all.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self(ValidationError::Failures(vec![FieldFailure::new(field, message)]).into())
    }
}

impl From<RestoMapError> for ApiError {
    fn from(err: RestoMapError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut errors: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        let (status, message) = match self.0 {
            RestoMapError::Validation(ValidationError::Failures(failures)) => {
                let message = ValidationError::Failures(Vec::new()).to_string();
                for failure in failures {
                    errors
                        .entry(failure.field)
                        .or_default()
                        .push(failure.message);
                }
                (StatusCode::BAD_REQUEST, message)
            }
            RestoMapError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RestoMapError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            RestoMapError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            RestoMapError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                errors,
            }),
        )
            .into_response()
    }
}
