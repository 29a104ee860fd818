//! Core engine: holds validated config, scores requests, assembles reports.

use crate::config::Config;
use crate::error::EngineError;
use crate::score;
use crate::types::*;
use crate::weights::validate_weights;

/// The impact scoring engine. Stateless across requests apart from its config.
#[derive(Debug, Clone)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Result<Self, EngineError> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn with_defaults() -> Self {
    Self {
      config: Config::default(),
    }
  }

  /// Score with the configured weights. Never fails.
  pub fn compute(&self, metrics: &InputMetrics) -> ComputedImpactResult {
    self.compute_weighted(metrics, &self.config.weights)
  }

  fn compute_weighted(&self, metrics: &InputMetrics, weights: &Weights) -> ComputedImpactResult {
    score::compute_with(
      metrics,
      weights,
      &self.config.risk_thresholds,
      &self.config.confidence,
    )
  }

  /// Score a single request.
  ///
  /// Fails only when the request carries weights that are disallowed or invalid.
  pub fn score(&self, req: &ScoreRequest) -> Result<ImpactReport, EngineError> {
    let weights = self.resolve_weights(req.weights.as_ref())?;
    log_out_of_range(&req.metrics);

    let result = self.compute_weighted(&req.metrics, &weights);
    let missing = req.metrics.missing();
    let breakdown = score::breakdown(&req.metrics, &weights);
    let explanations = score::compute_explanations(&result, &missing);

    tracing::debug!(
      id = req.id.as_deref().unwrap_or("-"),
      impact_score = result.impact_score,
      risk_level = result.risk_level.as_str(),
      confidence = result.confidence_level,
      missing = missing.len(),
      "scored request"
    );

    Ok(ImpactReport {
      id: req.id.clone(),
      result,
      missing_metrics: missing,
      breakdown,
      explanations,
    })
  }

  fn resolve_weights(&self, requested: Option<&Weights>) -> Result<Weights, EngineError> {
    match requested {
      None => Ok(self.config.weights),
      Some(_) if !self.config.allow_weight_override => Err(EngineError::validation(
        "weights",
        "per-request weights are disabled",
      )),
      Some(w) => {
        validate_weights(w)?;
        Ok(*w)
      }
    }
  }
}

fn log_out_of_range(metrics: &InputMetrics) {
  for kind in MetricKind::ALL {
    if let Some(v) = metrics.get(kind) {
      if !(0.0..=100.0).contains(&v) {
        tracing::debug!(metric = kind.label(), value = v, "metric outside 0-100; clamped");
      }
    }
  }
}
