//! Awareness Impact Scoring Service
//!
//! HTTP service that scores impact requests and stores per-campaign results.
//! Bind to 127.0.0.1 by default (internal only).

mod handlers;
mod state;
mod store;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use handlers::{campaign_impact, health, score, ApiError};
pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/score", post(score))
    .route("/campaigns/:campaign_id/impact", post(campaign_impact))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
