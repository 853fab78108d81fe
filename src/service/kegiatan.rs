use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::kegiatan_ref::{self, LEVEL_KEGIATAN, LEVEL_SUB_KEGIATAN};
use crate::error::{AppError, AppResult};

/// Activity codes of one level (5 = kegiatan, 6 = sub-kegiatan), ordered by code
pub async fn list_by_level(
    db: &DatabaseConnection,
    level: i32,
) -> AppResult<Vec<kegiatan_ref::Model>> {
    if level != LEVEL_KEGIATAN && level != LEVEL_SUB_KEGIATAN {
        return Err(AppError::BadRequest(format!(
            "Level kegiatan harus {} atau {}",
            LEVEL_KEGIATAN, LEVEL_SUB_KEGIATAN
        )));
    }

    Ok(kegiatan_ref::Entity::find()
        .filter(kegiatan_ref::Column::Level.eq(level))
        .order_by_asc(kegiatan_ref::Column::Kode)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_kegiatan, setup_test_db};

    #[tokio::test]
    async fn test_list_by_level() {
        let db = setup_test_db().await;
        seed_kegiatan(&db, "5.02.02.2.03.0005", "Penyusunan Ranperda", 6).await;
        seed_kegiatan(&db, "5.02.02.2.03", "Koordinasi Akuntansi", 5).await;
        seed_kegiatan(&db, "5.02.02.2.03.0001", "Penyusunan Laporan", 6).await;

        let subs = list_by_level(&db, 6).await.unwrap();
        let kodes: Vec<&str> = subs.iter().map(|k| k.kode.as_str()).collect();
        assert_eq!(kodes, vec!["5.02.02.2.03.0001", "5.02.02.2.03.0005"]);

        assert_eq!(list_by_level(&db, 5).await.unwrap().len(), 1);
        assert!(matches!(
            list_by_level(&db, 4).await,
            Err(AppError::BadRequest(_))
        ));
    }
}
