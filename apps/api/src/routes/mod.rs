pub mod health;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

/// Maps a panicking handler onto the standard error envelope.
fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Internal(anyhow::anyhow!("request handler panicked")).into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/platforms", get(handlers::handle_list_platforms))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
