use crate::api::{error::ApiError, password, storage, token};
use crate::cli::globals::GlobalArgs;
use axum::{
    extract::{Extension, Form},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, instrument};
use utoipa::ToSchema;

/// Form-encoded credentials; `username` carries the lab id.
#[derive(ToSchema, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(ToSchema, Serialize)]
pub struct TokenResponse {
    access_token: String,
    token_type: String,
}

#[utoipa::path(
    post,
    path= "/login",
    responses (
        (status = 200, description = "Login successful", body = [TokenResponse], content_type = "application/json"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Unknown lab id and wrong password take the same exit; the responses
    // must stay byte-identical.
    let student = storage::find_by_lab_id(&pool, &form.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify(&form.password, &student.password) {
        debug!("Password mismatch");

        return Err(ApiError::InvalidCredentials);
    }

    let access_token = token::mint(
        &globals.jwt_secret,
        &student.lab_id,
        globals.token_ttl_minutes,
    )
    .map_err(|err| ApiError::Internal(anyhow::anyhow!("token encoding failed: {err}")))?;

    debug!(lab_id = %student.lab_id, "Login successful");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
