//! Database-backed operations
//!
//! Handlers stay thin; everything that touches the schema lives here so it
//! can be exercised against any sea-orm connection.

pub mod destinasi;
pub mod draft;
pub mod kegiatan;
pub mod nota;
pub mod pegawai;
pub mod pejabat;
pub mod resolve;

use sea_orm::DbErr;

use crate::error::{constraint_violation, AppError, Constraint};

/// Map a failed delete: a foreign-key violation means the row is still
/// referenced somewhere.
pub(crate) fn delete_error(err: DbErr, in_use_message: &str) -> AppError {
    match constraint_violation(&err) {
        Some((Constraint::ForeignKey, raw)) => {
            tracing::warn!("Delete blocked by reference: {}", raw);
            AppError::InUse(in_use_message.to_string())
        }
        _ => AppError::Database(err),
    }
}

/// Map a failed write on a table with one unique column
pub(crate) fn unique_error(err: DbErr, field: &str, message: &str) -> AppError {
    match constraint_violation(&err) {
        Some((Constraint::Unique, raw)) => {
            tracing::warn!("Unique constraint on {} violated: {}", field, raw);
            AppError::Duplicate {
                field: field.to_string(),
                message: message.to_string(),
            }
        }
        _ => AppError::Database(err),
    }
}

/// `ActiveModel::update` reports a missing row as `RecordNotUpdated`
pub(crate) fn update_error(err: DbErr, not_found: &str) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound(not_found.to_string()),
        other => AppError::Database(other),
    }
}
