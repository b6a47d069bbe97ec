use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every expected failure becomes a structured JSON body with a status code.
/// The three authentication causes (unknown user, bad password, email
/// mismatch) all collapse into `InvalidCredentials` before serialization, so
/// the caller cannot tell which check failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing request body")]
    MissingBody,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("username already registered")]
    UsernameTaken,
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingBody => (
                StatusCode::BAD_REQUEST,
                json!({
                    "msg": "you must send the following fields:",
                    "campos": {
                        "username": "required",
                        "email": "required",
                        "password": "required",
                    },
                }),
            ),
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                json!({ "msg": format!("you must send the {field} field") }),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                json!({ "msg": "incorrect username, email or password" }),
            ),
            ApiError::UsernameTaken => (
                StatusCode::CONFLICT,
                json!({ "msg": "username already registered" }),
            ),
            ApiError::Unauthorized(reason) => {
                (StatusCode::UNAUTHORIZED, json!({ "msg": reason }))
            }
            ApiError::Internal(e) => {
                error!(error = %e, "unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "msg": "internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
