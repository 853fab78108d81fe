//! Employee handlers
//!
//! Implements employee CRUD operations

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::IdQuery;
use crate::entity::pegawai;
use crate::error::AppResult;
use crate::routes::ApiResponse;
use crate::service::pegawai::{self as service, PegawaiInput, PegawaiOption};
use crate::state::AppState;

/// Update employee request
#[derive(Debug, Deserialize)]
pub struct UpdatePegawaiRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub input: PegawaiInput,
}

/// Employee response
#[derive(Debug, Serialize)]
pub struct PegawaiResponse {
    pub id: Uuid,
    pub nama: String,
    pub nip: String,
    pub pangkat: String,
    pub golongan: String,
    pub jabatan: String,
}

impl From<pegawai::Model> for PegawaiResponse {
    fn from(m: pegawai::Model) -> Self {
        Self {
            id: m.id,
            nama: m.nama,
            nip: m.nip,
            pangkat: m.pangkat,
            golongan: m.golongan,
            jabatan: m.jabatan,
        }
    }
}

/// POST /api/pegawai/add
pub async fn add_pegawai(
    State(state): State<AppState>,
    Json(req): Json<PegawaiInput>,
) -> AppResult<Json<ApiResponse<PegawaiResponse>>> {
    let created = service::create(&state.db, req).await?;
    Ok(Json(ApiResponse::success(created.into())))
}

/// POST /api/pegawai/update
pub async fn update_pegawai(
    State(state): State<AppState>,
    Json(req): Json<UpdatePegawaiRequest>,
) -> AppResult<Json<ApiResponse<PegawaiResponse>>> {
    let updated = service::update(&state.db, req.id, req.input).await?;
    Ok(Json(ApiResponse::success(updated.into())))
}

/// POST /api/pegawai/delete?id=
pub async fn delete_pegawai(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<ApiResponse<()>>> {
    service::delete(&state.db, query.id).await?;
    Ok(Json(ApiResponse::success_msg("success")))
}

/// GET /api/pegawai/query
pub async fn get_pegawai_list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PegawaiResponse>>>> {
    let rows = service::list(&state.db).await?;
    Ok(Json(ApiResponse::success(
        rows.into_iter().map(PegawaiResponse::from).collect(),
    )))
}

/// GET /api/pegawai/info?id=
pub async fn get_pegawai(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<ApiResponse<PegawaiResponse>>> {
    let row = service::get(&state.db, query.id).await?;
    Ok(Json(ApiResponse::success(row.into())))
}

/// GET /api/pegawai/options
pub async fn get_pegawai_options(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PegawaiOption>>>> {
    Ok(Json(ApiResponse::success(service::options(&state.db).await?)))
}
