use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::codec;
use crate::error::LayoutError;
use crate::services::{generator, EditMode, LayoutSession};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/layouts/generate", post(generate_layout))
        .route("/layouts/decode", post(decode_layout))
        .route("/layouts/toggle", patch(toggle_token))
}

/* ---------- GENERATE ---------- */

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    groups: Vec<generator::GroupSpec>,
}

// POST /api/layouts/generate
async fn generate_layout(
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.groups.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "groups must not be empty".to_string()));
    }
    let layout = generator::generate_layout(&req.groups);
    Ok(Json(json!({ "success": true, "layout": layout })))
}

/* ---------- DECODE ---------- */

#[derive(Debug, Deserialize)]
struct DecodeRequest {
    layout: String,
}

// POST /api/layouts/decode
//
// Возвращает структурный вид строки: группы с прикреплёнными рядами и
// типизированными клетками. Мусорные записи уже отброшены декодом.
async fn decode_layout(Json(req): Json<DecodeRequest>) -> impl IntoResponse {
    let layout = codec::layout::decode(&req.layout);
    Json(json!({ "success": true, "layout": layout }))
}

/* ---------- TOGGLE ---------- */

#[derive(Debug, Deserialize)]
struct ToggleRequest {
    layout: String,
    grp_code: String,
    grp_row_index: u32,
    /// Индекс клика в системе координат показа (с учётом gap).
    index: usize,
    mode: EditMode,
    reverse: Option<bool>,
    gap: Option<usize>,
}

// PATCH /api/layouts/toggle
//
// Строка layout путешествует в теле запроса и ответа целиком — сервер
// ничего не хранит между вызовами.
async fn toggle_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let gap = req.gap.unwrap_or(state.config.layout.gap);
    let reverse = req.reverse.unwrap_or(state.config.layout.reverse_numbering);

    let mut session = LayoutSession::new(req.layout, gap);
    match session.toggle(&req.grp_code, req.grp_row_index, req.index, req.mode, reverse) {
        Ok(()) => Ok(Json(json!({ "success": true, "layout": session.layout() }))),
        Err(e @ LayoutError::RowNotFound { .. }) => {
            Err((StatusCode::NOT_FOUND, e.to_string()))
        }
        Err(e) => {
            tracing::error!("toggle failed: {:?}", e);
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}
