//! HTTP handlers for the impact service.

use axum::{
  extract::{Path, State},
  http::StatusCode,
  Json,
};
use chrono::Utc;
use impact_engine::stream::error_output;
use impact_engine::types::ErrorOutput;
use impact_engine::{ImpactReport, ScoreRequest};
use std::sync::Arc;
use uuid::Uuid;

use crate::state::AppState;
use crate::store;

pub type ApiError = (StatusCode, Json<ErrorOutput>);

pub async fn health() -> &'static str {
  "ok"
}

pub async fn score(
  State(state): State<Arc<AppState>>,
  Json(req): Json<ScoreRequest>,
) -> Result<Json<ImpactReport>, ApiError> {
  let report = state.engine.score(&req).map_err(|e| {
    tracing::warn!(error = %e, "score: rejected request");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(error_output(&e)))
  })?;
  Ok(Json(report))
}

pub async fn campaign_impact(
  State(state): State<Arc<AppState>>,
  Path(campaign_id): Path<Uuid>,
  Json(req): Json<ScoreRequest>,
) -> Result<Json<ImpactReport>, ApiError> {
  let pool = state.pool.as_ref().ok_or_else(|| {
    (
      StatusCode::SERVICE_UNAVAILABLE,
      Json(ErrorOutput::new("persistence disabled: DATABASE_URL not set")),
    )
  })?;

  let report = state.engine.score(&req).map_err(|e| {
    tracing::warn!(%campaign_id, error = %e, "campaign_impact: rejected request");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(error_output(&e)))
  })?;

  store::upsert_campaign_impact(pool, campaign_id, &req.metrics, &report.result, Utc::now())
    .await
    .map_err(|e| {
      tracing::error!(%campaign_id, error = %e, "campaign_impact: db error");
      (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorOutput::new("database error")))
    })?;

  tracing::info!(
    %campaign_id,
    impact_score = report.result.impact_score,
    risk_level = report.result.risk_level.as_str(),
    "stored campaign impact"
  );
  Ok(Json(report))
}
