use crate::api::{error::ApiError, handlers::bearer_token, storage, token};
use crate::cli::globals::GlobalArgs;
use axum::{extract::Extension, http::HeaderMap, Json};
use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, instrument};
use utoipa::ToSchema;

/// Public profile projection. `year` and the password hash are not part of
/// this view; `year` stays out to match the established response shape.
#[derive(ToSchema, Serialize)]
pub struct MeResponse {
    lab_id: String,
    name: String,
    usn: String,
    department: String,
}

impl From<storage::Student> for MeResponse {
    fn from(student: storage::Student) -> Self {
        Self {
            lab_id: student.lab_id,
            name: student.name,
            usn: student.usn,
            department: student.department,
        }
    }
}

#[utoipa::path(
    get,
    path= "/me",
    responses (
        (status = 200, description = "Authenticated student profile", body = [MeResponse], content_type = "application/json"),
        (status = 401, description = "Invalid token or user not found"),
    ),
    tag= "me"
)]
// axum handler for me
#[instrument(skip_all)]
pub async fn me(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
) -> Result<Json<MeResponse>, ApiError> {
    let bearer = bearer_token(&headers).ok_or(ApiError::InvalidToken)?;

    let claims = token::verify(&globals.jwt_secret, bearer).map_err(|err| {
        debug!("Token verification failed: {err}");

        ApiError::InvalidToken
    })?;

    let student = storage::find_by_lab_id(&pool, &claims.sub)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(MeResponse::from(student)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_excludes_year_and_password() {
        let student = storage::Student {
            lab_id: "LAB-01".to_string(),
            name: "Ann".to_string(),
            usn: "1BY21CS001".to_string(),
            year: "3".to_string(),
            department: "CSE".to_string(),
            password: "$argon2id$not-exposed".to_string(),
        };

        let json = serde_json::to_value(MeResponse::from(student)).expect("serializable");

        assert_eq!(
            json,
            serde_json::json!({
                "lab_id": "LAB-01",
                "name": "Ann",
                "usn": "1BY21CS001",
                "department": "CSE"
            })
        );
    }
}
