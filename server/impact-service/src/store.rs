//! Persistence of computed campaign impact scores.

use chrono::{DateTime, Utc};
use impact_engine::{ComputedImpactResult, InputMetrics};
use sqlx_core::query::query;
use sqlx_postgres::{PgPool, Postgres};
use uuid::Uuid;

/// Insert or replace the latest score for a campaign.
pub async fn upsert_campaign_impact(
  pool: &PgPool,
  campaign_id: Uuid,
  metrics: &InputMetrics,
  result: &ComputedImpactResult,
  calculated_at: DateTime<Utc>,
) -> Result<(), sqlx_core::Error> {
  query::<Postgres>(
    r#"
    INSERT INTO campaign_impact_scores (
      campaign_id, engagement_score, completion_score, feedback_quality_score,
      compliance_linkage_score, impact_score, risk_level, confidence_level, calculated_at
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    ON CONFLICT (campaign_id) DO UPDATE SET
      engagement_score = EXCLUDED.engagement_score,
      completion_score = EXCLUDED.completion_score,
      feedback_quality_score = EXCLUDED.feedback_quality_score,
      compliance_linkage_score = EXCLUDED.compliance_linkage_score,
      impact_score = EXCLUDED.impact_score,
      risk_level = EXCLUDED.risk_level,
      confidence_level = EXCLUDED.confidence_level,
      calculated_at = EXCLUDED.calculated_at
    "#,
  )
  .bind(campaign_id)
  .bind(metrics.engagement_score)
  .bind(metrics.completion_score)
  .bind(metrics.feedback_quality_score)
  .bind(metrics.compliance_linkage_score)
  .bind(result.impact_score)
  .bind(result.risk_level.as_str())
  .bind(result.confidence_level as i16)
  .bind(calculated_at)
  .execute(pool)
  .await?;
  Ok(())
}
