use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use creditsim_core::SimulationError;
use serde_json::json;

/// Errors returned by the creditsim API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("Invalid parameter: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    fn field(&self) -> Option<&str> {
        match self {
            ApiError::Simulation(err) => err.field(),
            ApiError::ValidationError { field, .. } => Some(field),
            ApiError::InvalidBody(_) | ApiError::InternalError => None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("simulation task failed: {err}");
        ApiError::InternalError
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Simulation(_) | ApiError::ValidationError { .. } | ApiError::InvalidBody(_) => {
                tracing::debug!("rejected request: {self}");
                StatusCode::BAD_REQUEST
            }
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "field": self.field(),
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_errors_are_bad_requests() {
        let err = ApiError::from(SimulationError::MissingField {
            field: "credit_score",
        });
        assert_eq!(err.field(), Some("credit_score"));
        assert_eq!(err.to_string(), "missing required field `credit_score`");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ApiError::InternalError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
