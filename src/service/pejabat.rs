//! Officials who address, send or sign a memorandum

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use super::{delete_error, update_error};
use crate::entity::pejabat;
use crate::error::{AppError, AppResult, FieldError, OptionExt};

const NOT_FOUND: &str = "Pejabat tidak ditemukan";
pub const IN_USE: &str = "Pejabat sedang digunakan dalam nota dinas dan tidak dapat dihapus";

/// Create (no `id`) or update (with `id`) an official
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPejabat {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub nama: String,
    #[serde(default)]
    pub nip: Option<String>,
    pub jabatan: String,
    #[serde(default)]
    pub unit: Option<String>,
}

impl UpsertPejabat {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.nama.trim().is_empty() {
            errors.push(FieldError::new("nama", "Nama wajib diisi"));
        }
        if self.jabatan.trim().is_empty() {
            errors.push(FieldError::new("jabatan", "Jabatan wajib diisi"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Empty strings are stored as NULL
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<pejabat::Model>> {
    Ok(pejabat::Entity::find()
        .order_by_asc(pejabat::Column::Nama)
        .all(db)
        .await?)
}

pub async fn upsert(db: &DatabaseConnection, input: UpsertPejabat) -> AppResult<pejabat::Model> {
    input.validate().map_err(AppError::Validation)?;
    let now = Utc::now();

    match input.id {
        Some(id) => {
            pejabat::Entity::find_by_id(id)
                .one(db)
                .await?
                .ok_or_not_found(NOT_FOUND)?;

            let model = pejabat::ActiveModel {
                id: Set(id),
                nama: Set(input.nama),
                nip: Set(blank_to_none(input.nip)),
                jabatan: Set(input.jabatan),
                unit: Set(blank_to_none(input.unit)),
                updated_at: Set(now),
                ..Default::default()
            };
            let updated = model
                .update(db)
                .await
                .map_err(|e| update_error(e, NOT_FOUND))?;
            tracing::info!("Pejabat updated: {}", updated.id);
            Ok(updated)
        }
        None => {
            let model = pejabat::ActiveModel {
                id: Set(Uuid::new_v4()),
                nama: Set(input.nama),
                nip: Set(blank_to_none(input.nip)),
                jabatan: Set(input.jabatan),
                unit: Set(blank_to_none(input.unit)),
                created_at: Set(now),
                updated_at: Set(now),
            };
            let created = model.insert(db).await?;
            tracing::info!("Pejabat created: {} ({})", created.nama, created.id);
            Ok(created)
        }
    }
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> AppResult<()> {
    let result = pejabat::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| delete_error(e, IN_USE))?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!("Pejabat deleted: {}", id);
    Ok(())
}
