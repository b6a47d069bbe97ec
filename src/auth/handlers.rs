use axum::{
    body::Bytes,
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{CredentialsPayload, PrivateResponse, TokenResponse},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::hash_password,
        repo_types::User,
        services::{self, AuthOutcome},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/private", get(private))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let payload: CredentialsPayload =
        serde_json::from_slice(&body).map_err(|_| ApiError::MissingBody)?;
    let creds = payload.validate()?;

    let hash = hash_password(&creds.password)?;

    let user = match User::create(&state.db, &creds.username, &creds.email, &hash).await {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(username = %creds.username, "signup duplicate username");
            return Err(ApiError::UsernameTaken);
        }
        Err(e) => return Err(ApiError::Internal(e.into())),
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.username)?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            msg: "your user has been created".into(),
            jwt_token: token,
        }),
    ))
}

#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, ApiError> {
    let payload: CredentialsPayload =
        serde_json::from_slice(&body).map_err(|_| ApiError::MissingField("username"))?;
    let creds = payload.validate()?;

    // All three failure causes flatten to the same response so the caller
    // cannot probe which field was wrong.
    let user = match services::authenticate(&state.db, &creds).await? {
        AuthOutcome::Ok(user) => user,
        outcome => {
            warn!(username = %creds.username, ?outcome, "login rejected");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.username)?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse {
        msg: "all credentials are ok".into(),
        jwt_token: token,
    }))
}

/// No database lookup here: the token alone proves identity, so it stays
/// valid for this endpoint until expiry.
pub async fn private(AuthUser(user): AuthUser) -> Json<PrivateResponse> {
    Json(PrivateResponse { logged_in_as: user })
}
