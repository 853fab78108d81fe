//! Draft workflow handlers
//!
//! Stage a form as a draft, show it resolved or laid out for print, and turn
//! it into a permanent memorandum.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::nota::form::PREVIEW_THRESHOLD;
use crate::nota::{render, NotaDocument, NotaForm, ResolvedNota};
use crate::routes::ApiResponse;
use crate::service::draft::{self, DRAFT_NOT_FOUND};
use crate::service::{nota, resolve};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub percentage: u8,
    pub ready_for_preview: bool,
}

#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: Uuid,
}

// Unparseable ids cannot name a stored draft
fn parse_draft_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(DRAFT_NOT_FOUND.to_string()))
}

/// POST /api/nota/form/completion
pub async fn form_completion(Json(form): Json<NotaForm>) -> Json<ApiResponse<CompletionResponse>> {
    let form = form.normalized();
    Json(ApiResponse::success(CompletionResponse {
        percentage: form.completion_percentage(),
        ready_for_preview: form.ready_for_preview(),
    }))
}

/// POST /api/nota/draft/add
///
/// Stages the form only when it is complete enough and passes the form
/// schema; returns the draft id.
pub async fn add_draft(
    State(state): State<AppState>,
    Json(form): Json<NotaForm>,
) -> AppResult<Json<ApiResponse<IdResponse>>> {
    let percentage = form.completion_percentage();
    if percentage < PREVIEW_THRESHOLD {
        return Err(AppError::BadRequest(format!(
            "Form baru {}% lengkap, minimal {}% untuk preview",
            percentage, PREVIEW_THRESHOLD
        )));
    }

    // The number must arrive as three digits; padding only happens on staging
    form.validate().map_err(AppError::Validation)?;
    let form = form.normalized();

    let id = draft::create_draft(&state.db, &form).await?;
    Ok(Json(ApiResponse::success(IdResponse { id })))
}

/// GET /api/nota/draft/:id
pub async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ResolvedNota>>> {
    let id = parse_draft_id(&id)?;
    let resolved = resolve::resolve_draft(&state.db, id).await?;
    Ok(Json(ApiResponse::success(resolved)))
}

/// GET /api/nota/draft/:id/document
pub async fn get_draft_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<NotaDocument>>> {
    let id = parse_draft_id(&id)?;
    let resolved = resolve::resolve_draft(&state.db, id).await?;
    Ok(Json(ApiResponse::success(render(&resolved))))
}

/// POST /api/nota/draft/:id/persist
pub async fn persist_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<IdResponse>>> {
    let id = parse_draft_id(&id)?;
    let nota_id = nota::persist_draft(&state.db, id).await?;
    Ok(Json(ApiResponse::success(IdResponse { id: nota_id })))
}
