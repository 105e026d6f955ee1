use crate::modules::stoppages::application::errors::StoppageError;
use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub fn status_for(error: &StoppageError) -> StatusCode {
    match error {
        StoppageError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoppageError::NotFound(_) => StatusCode::NOT_FOUND,
        StoppageError::InvalidState { .. } => StatusCode::CONFLICT,
        StoppageError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn error_response(error: StoppageError) -> Response {
    if matches!(error, StoppageError::StoreUnavailable(_)) {
        tracing::error!(%error, "record store failure");
    }
    (
        status_for(&error),
        Json(serde_json::json!({ "error": error.to_string() })),
    )
        .into_response()
}

/// Query strings that do not deserialize are reported like any other invalid input.
pub fn query_rejected(rejection: QueryRejection) -> Response {
    error_response(StoppageError::Validation(rejection.body_text()))
}
