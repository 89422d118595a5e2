use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::generation::generator::GenerationError;
use crate::lesson::validation::ValidationResult;
use crate::session::SubmitError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Incomplete lesson plan request")]
    InvalidRequest(ValidationResult),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Generation(GenerationError::Configuration) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Render(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the teacher.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Conflict(msg) => msg.clone(),
            AppError::InvalidRequest(validation) => validation.summary(),
            AppError::Generation(e) => e.user_message().to_string(),
            AppError::Render(_) | AppError::Internal(_) => {
                "Terjadi kesalahan pada server.".to_string()
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Generation(GenerationError::Configuration) => "CONFIGURATION_ERROR",
            AppError::Generation(GenerationError::EmptyResponse) => "EMPTY_RESPONSE",
            AppError::Generation(GenerationError::MalformedResponse(_)) => "MALFORMED_RESPONSE",
            AppError::Generation(GenerationError::Service(_)) => "GENERATION_SERVICE_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(error: SubmitError) -> Self {
        match error {
            SubmitError::Invalid(validation) => AppError::InvalidRequest(validation),
            SubmitError::Busy | SubmitError::Discarded => AppError::Conflict(error.user_message()),
            SubmitError::Generation(e) => AppError::Generation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Generation(e) => tracing::error!("Generation error: {e}"),
            AppError::Render(e) => tracing::error!("Render error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => {}
        }

        let mut error = json!({
            "code": self.code(),
            "message": self.user_message(),
        });
        if let AppError::InvalidRequest(validation) = &self {
            error["details"] = json!({ "issues": validation.issues });
        }

        let body: Json<Value> = Json(json!({ "error": error }));
        (self.status(), body).into_response()
    }
}
