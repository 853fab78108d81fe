//! Configuration handlers
//!
//! Returns the constants the add-nota form needs

use axum::response::Json;
use serde::Serialize;

use crate::nota::form::PREVIEW_THRESHOLD;
use crate::nota::number::{NOMOR_PREFIX, NOMOR_SUFFIX, SEQUENCE_WIDTH};
use crate::routes::ApiResponse;

/// Public configuration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub nomor_prefix: &'static str,
    pub nomor_suffix: &'static str,
    pub nomor_width: usize,
    /// Completion percent from which a draft may be staged
    pub preview_threshold: u8,
}

/// GET /api/config
pub async fn get_config() -> Json<ApiResponse<PublicConfig>> {
    Json(ApiResponse::success(PublicConfig {
        nomor_prefix: NOMOR_PREFIX,
        nomor_suffix: NOMOR_SUFFIX,
        nomor_width: SEQUENCE_WIDTH,
        preview_threshold: PREVIEW_THRESHOLD,
    }))
}
