//! Travel destinations

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use super::{delete_error, update_error};
use crate::entity::destinasi;
use crate::error::{AppError, AppResult, FieldError, OptionExt};

pub const NAMA_REQUIRED: &str = "Nama destinasi wajib diisi";
pub const IN_USE: &str = "Destinasi sedang digunakan dalam nota dinas dan tidak dapat dihapus";
const NOT_FOUND: &str = "Destinasi tidak ditemukan";

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertDestinasi {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub nama: String,
}

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<destinasi::Model>> {
    Ok(destinasi::Entity::find()
        .order_by_asc(destinasi::Column::Nama)
        .all(db)
        .await?)
}

/// Create or rename a destination. The name is stored trimmed.
pub async fn upsert(
    db: &DatabaseConnection,
    input: UpsertDestinasi,
) -> AppResult<destinasi::Model> {
    let nama = input.nama.trim().to_string();
    if nama.is_empty() {
        return Err(AppError::Validation(vec![FieldError::new(
            "nama",
            NAMA_REQUIRED,
        )]));
    }
    let now = Utc::now();

    if let Some(id) = input.id {
        destinasi::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_not_found(NOT_FOUND)?;

        let model = destinasi::ActiveModel {
            id: Set(id),
            nama: Set(nama),
            updated_at: Set(now),
            ..Default::default()
        };
        return model.update(db).await.map_err(|e| update_error(e, NOT_FOUND));
    }

    let model = destinasi::ActiveModel {
        id: Set(Uuid::new_v4()),
        nama: Set(nama),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = model.insert(db).await?;
    tracing::info!("Destinasi created: {} ({})", created.nama, created.id);
    Ok(created)
}

/// Delete a destination that no memorandum lists
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> AppResult<()> {
    let result = destinasi::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| delete_error(e, IN_USE))?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    fn named(nama: &str) -> UpsertDestinasi {
        UpsertDestinasi {
            id: None,
            nama: nama.to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_trims_and_orders() {
        let db = setup_test_db().await;
        upsert(&db, named("  Pekanbaru ")).await.unwrap();
        let jakarta = upsert(&db, named("Jakarta")).await.unwrap();

        let names: Vec<String> = list(&db).await.unwrap().into_iter().map(|d| d.nama).collect();
        assert_eq!(names, vec!["Jakarta", "Pekanbaru"]);

        let renamed = upsert(
            &db,
            UpsertDestinasi {
                id: Some(jakarta.id),
                nama: "Jakarta Pusat".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(renamed.nama, "Jakarta Pusat");
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let db = setup_test_db().await;
        let err = upsert(&db, named("   ")).await.unwrap_err();
        let AppError::Validation(fields) = err else {
            panic!("expected validation error");
        };
        assert_eq!(fields[0].message, NAMA_REQUIRED);
        assert!(list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unused() {
        let db = setup_test_db().await;
        let d = upsert(&db, named("Batam")).await.unwrap();
        delete(&db, d.id).await.unwrap();
        assert!(matches!(delete(&db, d.id).await, Err(AppError::NotFound(_))));
    }
}
