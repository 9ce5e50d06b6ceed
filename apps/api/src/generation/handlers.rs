//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::{generate_with, GeneratedPost, GenerationRequest};
use crate::generation::platforms::{PlatformProfile, PLATFORM_PROFILES};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: Vec<GeneratedPost>,
}

#[derive(Debug, Serialize)]
pub struct PlatformsResponse {
    pub platforms: &'static [PlatformProfile],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Renders one post (two for twitter) from a persona description.
/// A malformed body is reported as a generic server fault, never echoed back.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::GenerationFailed(e.body_text()))?;

    info!(
        "Generating {} / {} content for platform '{}'",
        request.content_type, request.tone, request.platform
    );

    let content = generate_with(&request, &state.generation);

    Ok(Json(GenerateResponse { content }))
}

/// GET /api/platforms
///
/// Lists the recognised platform profiles in display order.
pub async fn handle_list_platforms() -> Json<PlatformsResponse> {
    Json(PlatformsResponse {
        platforms: PLATFORM_PROFILES,
    })
}
