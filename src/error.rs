use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Duplicate {field}: {message}")]
    Duplicate { field: String, message: String },

    #[error("Still in use: {0}")]
    InUse(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = Vec::new();
        let (status, message, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", Some(msg)),
            AppError::Validation(errs) => {
                fields = errs;
                (StatusCode::BAD_REQUEST, "Validation Error", None)
            }
            AppError::Duplicate { field, message } => {
                fields.push(FieldError::new(field, message.clone()));
                (StatusCode::CONFLICT, "Conflict", Some(message))
            }
            AppError::InUse(msg) => (StatusCode::CONFLICT, "In Use", Some(msg)),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database Error", None)
            }
            AppError::Json(err) => {
                tracing::error!("Payload decode error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Invalid Stored Payload", None)
            }
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message: message.to_string(),
            details,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;

/// Helper trait for converting Option to AppError::NotFound
pub trait OptionExt<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(msg.into()))
    }
}

/// Helper to convert anyhow errors to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Constraint families the service layer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Unique,
    ForeignKey,
}

/// Classify a database error as a constraint violation.
///
/// The driver-level classification is tried first; the message patterns cover
/// errors that arrive already stringified (e.g. wrapped in `DbErr::Custom`).
/// Returns the violated constraint family and the raw driver message.
pub fn constraint_violation(err: &DbErr) -> Option<(Constraint, String)> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => return Some((Constraint::Unique, msg)),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return Some((Constraint::ForeignKey, msg))
        }
        _ => {}
    }

    let msg = err.to_string();
    let lower = msg.to_lowercase();
    if lower.contains("unique") || lower.contains("duplicate") {
        Some((Constraint::Unique, msg))
    } else if lower.contains("foreign key") {
        Some((Constraint::ForeignKey, msg))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = AppError::NotFound("Draft tidak ditemukan".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_statuses() {
        let dup = AppError::Duplicate {
            field: "nip".to_string(),
            message: "NIP sudah terdaftar".to_string(),
        };
        assert_eq!(dup.into_response().status(), StatusCode::CONFLICT);

        let in_use = AppError::InUse("Destinasi sedang digunakan".to_string());
        assert_eq!(in_use.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = AppError::Validation(vec![FieldError::new("nomor", "Nomor wajib diisi")]);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_anyhow_is_internal() {
        let err: AppError = anyhow::anyhow!("pool closed").into();
        assert!(matches!(err, AppError::Internal(ref m) if m == "pool closed"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_option_ext() {
        let opt: Option<i32> = None;
        let result = opt.ok_or_not_found("Item not found");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_constraint_message_fallback() {
        let unique = DbErr::Custom(
            "duplicate key value violates unique constraint \"pegawai_nip_key\"".to_string(),
        );
        assert_eq!(
            constraint_violation(&unique).map(|(kind, _)| kind),
            Some(Constraint::Unique)
        );

        let fk = DbErr::Custom(
            "update or delete on table \"destinasi\" violates foreign key constraint".to_string(),
        );
        assert_eq!(
            constraint_violation(&fk).map(|(kind, _)| kind),
            Some(Constraint::ForeignKey)
        );

        let other = DbErr::Custom("connection reset".to_string());
        assert!(constraint_violation(&other).is_none());
    }
}
