use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use phone_blocklist_domain::DomainError;
use serde_json::json;
use tracing::{debug, error};

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection, "Rejected request body");
        Self(DomainError::InvalidInput("Invalid JSON".to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidInput(_) | DomainError::InvalidPhoneNumber(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::AlreadyBlocked(_) => (StatusCode::CONFLICT, self.0.to_string()),

            DomainError::BlockNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::DatabaseError(e) => {
                error!(error = %e, "Request failed on storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
