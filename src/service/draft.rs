//! Draft store
//!
//! A draft is a staged `NotaForm` kept until it is either persisted or left
//! behind. Drafts are never edited in place.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::entity::nota_preview;
use crate::error::{AppError, AppResult};
use crate::nota::NotaForm;

pub const DRAFT_NOT_FOUND: &str = "Draft tidak ditemukan";

/// Store a form as a new draft and return its id
pub async fn create_draft<C: ConnectionTrait>(db: &C, form: &NotaForm) -> AppResult<Uuid> {
    let payload = serde_json::to_string(form)?;
    let model = nota_preview::ActiveModel {
        id: Set(Uuid::new_v4()),
        payload: Set(payload),
        created_at: Set(Utc::now()),
    };

    let row = model.insert(db).await.map_err(|e| {
        tracing::error!("Failed to store draft: {}", e);
        AppError::Database(e)
    })?;

    tracing::info!("Draft created: {}", row.id);
    Ok(row.id)
}

/// Load the form staged under `id`
pub async fn load_draft<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<NotaForm> {
    let Some(row) = nota_preview::Entity::find_by_id(id).one(db).await? else {
        tracing::warn!("Draft not found: {}", id);
        return Err(AppError::NotFound(DRAFT_NOT_FOUND.to_string()));
    };

    Ok(serde_json::from_str(&row.payload)?)
}

/// Remove a draft. Returns whether a row was deleted.
pub async fn delete_draft<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = nota_preview::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_store_and_load_keeps_form() {
        let db = setup_test_db().await;
        let form = NotaForm {
            nomor: "112".to_string(),
            tanggal: "2025-03-05".to_string(),
            tujuan_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            maksud: Some("Konsultasi".to_string()),
            ..NotaForm::default()
        };

        let id = create_draft(&db, &form).await.unwrap();
        let loaded = load_draft(&db, id).await.unwrap();
        assert_eq!(loaded, form);
    }

    #[tokio::test]
    async fn test_store_does_not_validate() {
        let db = setup_test_db().await;
        let id = create_draft(&db, &NotaForm::default()).await.unwrap();
        assert_eq!(load_draft(&db, id).await.unwrap().nomor, "");
    }

    #[tokio::test]
    async fn test_missing_and_deleted_draft() {
        let db = setup_test_db().await;
        assert!(matches!(
            load_draft(&db, Uuid::new_v4()).await,
            Err(AppError::NotFound(msg)) if msg == DRAFT_NOT_FOUND
        ));

        let id = create_draft(&db, &NotaForm::default()).await.unwrap();
        assert!(delete_draft(&db, id).await.unwrap());
        assert!(!delete_draft(&db, id).await.unwrap());
        assert!(matches!(load_draft(&db, id).await, Err(AppError::NotFound(_))));
    }
}
