use crate::api::{
    error::{is_unique_violation, ApiError},
    lab_id, password, storage,
};
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize)]
pub struct RegisterStudent {
    name: String,
    usn: String,
    year: String,
    department: String,
    password: String,
}

#[derive(ToSchema, Serialize)]
pub struct LabIdResponse {
    lab_id: String,
}

#[utoipa::path(
    post,
    path= "/register",
    request_body = RegisterStudent,
    responses (
        (status = 200, description = "Registration successful", body = [LabIdResponse], content_type = "application/json"),
        (status = 400, description = "USN already registered"),
    ),
    tag= "register"
)]
// axum handler for register
#[instrument(skip_all)]
pub async fn register(
    pool: Extension<PgPool>,
    Json(student): Json<RegisterStudent>,
) -> Result<Json<LabIdResponse>, ApiError> {
    // Pre-check keeps the common case cheap; the UNIQUE constraint on usn
    // catches the two-concurrent-registrations race below.
    if storage::usn_exists(&pool, &student.usn).await? {
        return Err(ApiError::DuplicateNaturalKey);
    }

    // Allocation is not rolled back if the insert fails; the sequence gap is
    // acceptable and the caller simply sees the error.
    let lab_id = lab_id::next_lab_id(&pool).await?;

    let hashed = password::hash(&student.password)
        .map_err(|err| ApiError::Internal(anyhow::anyhow!("password hashing failed: {err}")))?;

    let record = storage::Student {
        lab_id: lab_id.clone(),
        name: student.name,
        usn: student.usn,
        year: student.year,
        department: student.department,
        password: hashed,
    };

    storage::insert_student(&pool, &record)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                ApiError::DuplicateNaturalKey
            } else {
                ApiError::Storage(err)
            }
        })?;

    info!(lab_id = %record.lab_id, "Student registered");

    Ok(Json(LabIdResponse { lab_id }))
}
