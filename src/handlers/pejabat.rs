use axum::{
    extract::{Query, State},
    response::Json,
};

use super::IdQuery;
use crate::entity::pejabat;
use crate::error::AppResult;
use crate::routes::ApiResponse;
use crate::service::pejabat::{self as service, UpsertPejabat};
use crate::state::AppState;

/// GET /api/pejabat/query
pub async fn get_pejabat_list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<pejabat::Model>>>> {
    Ok(Json(ApiResponse::success(service::list(&state.db).await?)))
}

/// POST /api/pejabat/upsert
pub async fn upsert_pejabat(
    State(state): State<AppState>,
    Json(req): Json<UpsertPejabat>,
) -> AppResult<Json<ApiResponse<pejabat::Model>>> {
    Ok(Json(ApiResponse::success(service::upsert(&state.db, req).await?)))
}

/// POST /api/pejabat/delete?id=
pub async fn delete_pejabat(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<ApiResponse<()>>> {
    service::delete(&state.db, query.id).await?;
    Ok(Json(ApiResponse::success_msg("success")))
}
