use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

pub mod health;

/// API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: true,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: false,
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn success_msg(message: impl Into<String>) -> Self {
        Self {
            code: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Config routes
        .route("/config", get(handlers::config::get_config))
        // Employee routes
        .route("/pegawai/add", post(handlers::pegawai::add_pegawai))
        .route("/pegawai/update", post(handlers::pegawai::update_pegawai))
        .route("/pegawai/delete", post(handlers::pegawai::delete_pegawai))
        .route("/pegawai/query", get(handlers::pegawai::get_pegawai_list))
        .route("/pegawai/info", get(handlers::pegawai::get_pegawai))
        .route("/pegawai/options", get(handlers::pegawai::get_pegawai_options))
        // Official routes
        .route("/pejabat/query", get(handlers::pejabat::get_pejabat_list))
        .route("/pejabat/upsert", post(handlers::pejabat::upsert_pejabat))
        .route("/pejabat/delete", post(handlers::pejabat::delete_pejabat))
        // Destination routes
        .route("/destinasi/query", get(handlers::destinasi::get_destinasi_list))
        .route("/destinasi/upsert", post(handlers::destinasi::upsert_destinasi))
        .route("/destinasi/delete", post(handlers::destinasi::delete_destinasi))
        // Activity code routes
        .route("/kegiatan/query", get(handlers::kegiatan::get_kegiatan_list))
        // Draft workflow
        .route("/nota/form/completion", post(handlers::preview::form_completion))
        .route("/nota/draft/add", post(handlers::preview::add_draft))
        .route("/nota/draft/:id", get(handlers::preview::get_draft))
        .route("/nota/draft/:id/document", get(handlers::preview::get_draft_document))
        .route("/nota/draft/:id/persist", post(handlers::preview::persist_draft))
        // Memorandum routes
        .route("/nota/query", get(handlers::nota::get_nota_list))
        .route("/nota/info", get(handlers::nota::get_nota))
        .route("/nota/status", post(handlers::nota::update_nota_status));

    Router::new()
        .nest("/api", api_routes)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fallback handler for 404
pub async fn fallback() -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::NOT_FOUND, Json(ApiResponse::error("Not Found")))
}
