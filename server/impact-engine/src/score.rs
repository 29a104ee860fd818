//! Impact score, risk level, confidence, and human-readable explanations.
//!
//! Everything here is total: no errors, no panics, no I/O.

use crate::config::{ConfidencePolicy, RiskThresholds};
use crate::types::{ComputedImpactResult, InputMetrics, MetricContribution, MetricKind, RiskLevel, Weights};

/// Value in 0..=100 → 0..=1. Out-of-range values are clamped.
pub fn normalize(value: f64) -> f64 {
  (value / 100.0).clamp(0.0, 1.0)
}

/// Round to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// Per-metric contributions in canonical order. Missing metrics contribute 0.
pub fn breakdown(metrics: &InputMetrics, weights: &Weights) -> Vec<MetricContribution> {
  MetricKind::ALL
    .into_iter()
    .map(|kind| {
      let value = metrics.get(kind);
      let normalized = value.map(normalize).unwrap_or(0.0);
      let weight = weights.get(kind);
      MetricContribution {
        metric: kind,
        value,
        normalized,
        weight,
        contribution: normalized * weight,
      }
    })
    .collect()
}

/// Weighted sum clamped to [0,1], scaled to 0-100, rounded to two decimals.
pub fn weighted_score(metrics: &InputMetrics, weights: &Weights) -> f64 {
  let sum: f64 = breakdown(metrics, weights).iter().map(|c| c.contribution).sum();
  // NaN can only come from non-finite weights; treat as no signal.
  let sum = if sum.is_nan() { 0.0 } else { sum };
  round2(sum.clamp(0.0, 1.0) * 100.0)
}

/// Risk band for a 0-100 score; lower bounds inclusive.
pub fn risk_level_with(score: f64, t: &RiskThresholds) -> RiskLevel {
  if score >= t.very_low {
    RiskLevel::VeryLow
  } else if score >= t.low {
    RiskLevel::Low
  } else if score >= t.medium {
    RiskLevel::Medium
  } else {
    RiskLevel::High
  }
}

pub fn derive_risk_level(score: f64) -> RiskLevel {
  risk_level_with(score, &RiskThresholds::default())
}

pub fn confidence_with(missing: usize, policy: &ConfidencePolicy) -> u8 {
  let penalty = missing as i64 * policy.penalty_per_missing as i64;
  let raw = policy.base as i64 - penalty;
  // max/min rather than clamp: clamp panics when min > max.
  raw.max(policy.min as i64).min(policy.max as i64) as u8
}

/// 90 minus 10 per missing metric, clamped to [50, 99].
pub fn derive_confidence(missing: usize) -> u8 {
  confidence_with(missing, &ConfidencePolicy::default())
}

/// Full calculation with explicit thresholds and confidence policy.
pub fn compute_with(
  metrics: &InputMetrics,
  weights: &Weights,
  thresholds: &RiskThresholds,
  confidence: &ConfidencePolicy,
) -> ComputedImpactResult {
  let impact_score = weighted_score(metrics, weights);
  ComputedImpactResult {
    impact_score,
    risk_level: risk_level_with(impact_score, thresholds),
    confidence_level: confidence_with(metrics.missing().len(), confidence),
  }
}

/// Impact score with default thresholds and confidence policy.
pub fn compute_impact_score(metrics: &InputMetrics, weights: &Weights) -> ComputedImpactResult {
  compute_with(
    metrics,
    weights,
    &RiskThresholds::default(),
    &ConfidencePolicy::default(),
  )
}

/// Short human-readable reasons.
pub fn compute_explanations(result: &ComputedImpactResult, missing: &[MetricKind]) -> Vec<String> {
  let mut out = Vec::new();
  let band = match result.risk_level {
    RiskLevel::High => "Impact is low; program effectiveness is a high risk",
    RiskLevel::Medium => "Impact is moderate; some areas need attention",
    RiskLevel::Low => "Impact is good; residual risk is low",
    RiskLevel::VeryLow => "Impact is strong; residual risk is very low",
  };
  out.push(band.to_string());

  if missing.len() == MetricKind::ALL.len() {
    out.push("No metrics available; score defaults to 0".to_string());
  } else {
    for kind in missing {
      out.push(format!("{} score missing; counted as 0", kind.label()));
    }
  }
  out
}
