use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::IdQuery;
use crate::error::AppResult;
use crate::routes::ApiResponse;
use crate::service::destinasi::{self as service, UpsertDestinasi};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DestinasiResponse {
    pub id: Uuid,
    pub nama: String,
}

/// GET /api/destinasi/query
pub async fn get_destinasi_list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<DestinasiResponse>>>> {
    let rows = service::list(&state.db).await?;
    Ok(Json(ApiResponse::success(
        rows.into_iter()
            .map(|d| DestinasiResponse { id: d.id, nama: d.nama })
            .collect(),
    )))
}

/// POST /api/destinasi/upsert
pub async fn upsert_destinasi(
    State(state): State<AppState>,
    Json(req): Json<UpsertDestinasi>,
) -> AppResult<Json<ApiResponse<DestinasiResponse>>> {
    let row = service::upsert(&state.db, req).await?;
    Ok(Json(ApiResponse::success(DestinasiResponse {
        id: row.id,
        nama: row.nama,
    })))
}

/// POST /api/destinasi/delete?id=
pub async fn delete_destinasi(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<ApiResponse<()>>> {
    service::delete(&state.db, query.id).await?;
    Ok(Json(ApiResponse::success_msg("success")))
}
