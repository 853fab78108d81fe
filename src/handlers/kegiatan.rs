use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::routes::ApiResponse;
use crate::service::kegiatan;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    pub level: i32,
}

#[derive(Debug, Serialize)]
pub struct KegiatanResponse {
    pub id: Uuid,
    pub kode: String,
    pub nama: String,
    pub level: i32,
}

/// GET /api/kegiatan/query?level=5|6
pub async fn get_kegiatan_list(
    State(state): State<AppState>,
    Query(query): Query<LevelQuery>,
) -> AppResult<Json<ApiResponse<Vec<KegiatanResponse>>>> {
    let rows = kegiatan::list_by_level(&state.db, query.level).await?;
    Ok(Json(ApiResponse::success(
        rows.into_iter()
            .map(|k| KegiatanResponse {
                id: k.id,
                kode: k.kode,
                nama: k.nama,
                level: k.level,
            })
            .collect(),
    )))
}
