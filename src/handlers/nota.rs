use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::IdQuery;
use crate::entity::nota_dinas::NotaStatus;
use crate::error::AppResult;
use crate::routes::ApiResponse;
use crate::service::nota::{self as service, NotaDetail, NotaListRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: Uuid,
    pub status: NotaStatus,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub id: Uuid,
    pub status: NotaStatus,
}

/// GET /api/nota/query
pub async fn get_nota_list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<NotaListRow>>>> {
    Ok(Json(ApiResponse::success(service::list_nota(&state.db).await?)))
}

/// GET /api/nota/info?id=
pub async fn get_nota(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<ApiResponse<NotaDetail>>> {
    Ok(Json(ApiResponse::success(
        service::nota_detail(&state.db, query.id).await?,
    )))
}

/// POST /api/nota/status
pub async fn update_nota_status(
    State(state): State<AppState>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<StatusResponse>>> {
    let updated = service::update_status(&state.db, req.id, req.status).await?;
    Ok(Json(ApiResponse::success(StatusResponse {
        id: updated.id,
        status: updated.status,
    })))
}
