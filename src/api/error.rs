//! API boundary errors.
//!
//! Every failure a handler can produce maps to exactly one status/message
//! pair here. `InvalidCredentials` deliberately covers both "no such lab id"
//! and "wrong password" so login responses never reveal which part failed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    /// Registration with a USN that is already taken.
    DuplicateNaturalKey,
    /// Unknown lab id or wrong password; indistinguishable on purpose.
    InvalidCredentials,
    /// Bad signature, expired, malformed payload, or missing subject.
    InvalidToken,
    /// Valid token whose account no longer exists.
    UserNotFound,
    /// The database rejected or never received the operation.
    Storage(sqlx::Error),
    /// Hashing or signing failed; details are logged, never returned.
    Internal(anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err)
    }
}

/// PostgreSQL unique_violation; the `students.usn` constraint is the
/// storage-level guard behind the duplicate-registration check.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::DuplicateNaturalKey => (StatusCode::BAD_REQUEST, "USN already registered"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::UserNotFound => (StatusCode::UNAUTHORIZED, "User not found"),
            Self::Storage(err) => {
                error!("Database error: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, "database error")
            }
            Self::Internal(err) => {
                error!("Internal error: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        (status, message).into_response()
    }
}
