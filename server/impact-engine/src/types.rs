//! Core types for the impact engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Four optional sub-scores, each expected in 0..=100. `null` or omitted means missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMetrics {
  #[serde(default, alias = "engagement_score")]
  pub engagement_score: Option<f64>,
  #[serde(default, alias = "completion_score")]
  pub completion_score: Option<f64>,
  #[serde(default, alias = "feedback_quality_score")]
  pub feedback_quality_score: Option<f64>,
  #[serde(default, alias = "compliance_linkage_score")]
  pub compliance_linkage_score: Option<f64>,
}

impl InputMetrics {
  pub fn new(
    engagement: Option<f64>,
    completion: Option<f64>,
    feedback_quality: Option<f64>,
    compliance_linkage: Option<f64>,
  ) -> Self {
    Self {
      engagement_score: engagement,
      completion_score: completion,
      feedback_quality_score: feedback_quality,
      compliance_linkage_score: compliance_linkage,
    }
  }

  /// Raw value for one metric. Non-finite values count as missing.
  pub fn get(&self, kind: MetricKind) -> Option<f64> {
    let v = match kind {
      MetricKind::Engagement => self.engagement_score,
      MetricKind::Completion => self.completion_score,
      MetricKind::FeedbackQuality => self.feedback_quality_score,
      MetricKind::ComplianceLinkage => self.compliance_linkage_score,
    };
    v.filter(|x| x.is_finite())
  }

  /// Metrics with no usable value, in canonical order.
  pub fn missing(&self) -> Vec<MetricKind> {
    MetricKind::ALL
      .into_iter()
      .filter(|k| self.get(*k).is_none())
      .collect()
  }
}

/// One scoring request line.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
  /// Opaque caller id, echoed back in the report.
  #[serde(default)]
  pub id: Option<String>,
  pub metrics: InputMetrics,
  /// Per-request weights; falls back to the configured weights.
  #[serde(default)]
  pub weights: Option<Weights>,
}

// ---------------------------------------------------------------------------
// Metric kinds and weights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
  Engagement,
  Completion,
  FeedbackQuality,
  ComplianceLinkage,
}

impl MetricKind {
  pub const ALL: [MetricKind; 4] = [
    Self::Engagement,
    Self::Completion,
    Self::FeedbackQuality,
    Self::ComplianceLinkage,
  ];

  /// Field name used in weight validation errors.
  pub fn weight_field(self) -> &'static str {
    match self {
      Self::Engagement => "weights.engagement",
      Self::Completion => "weights.completion",
      Self::FeedbackQuality => "weights.feedback_quality",
      Self::ComplianceLinkage => "weights.compliance_linkage",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Engagement => "Engagement",
      Self::Completion => "Completion",
      Self::FeedbackQuality => "Feedback quality",
      Self::ComplianceLinkage => "Compliance linkage",
    }
  }
}

/// Relative weight of each metric. Expected to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weights {
  #[serde(alias = "engagement_score", alias = "engagementScore")]
  pub engagement: f64,
  #[serde(alias = "completion_score", alias = "completionScore")]
  pub completion: f64,
  #[serde(alias = "feedback_quality", alias = "feedback_quality_score", alias = "feedbackQualityScore")]
  pub feedback_quality: f64,
  #[serde(alias = "compliance_linkage", alias = "compliance_linkage_score", alias = "complianceLinkageScore")]
  pub compliance_linkage: f64,
}

impl Default for Weights {
  fn default() -> Self {
    Self {
      engagement: 0.25,
      completion: 0.25,
      feedback_quality: 0.25,
      compliance_linkage: 0.25,
    }
  }
}

impl Weights {
  pub fn get(&self, kind: MetricKind) -> f64 {
    match kind {
      MetricKind::Engagement => self.engagement,
      MetricKind::Completion => self.completion,
      MetricKind::FeedbackQuality => self.feedback_quality,
      MetricKind::ComplianceLinkage => self.compliance_linkage,
    }
  }

  pub fn sum(&self) -> f64 {
    MetricKind::ALL.iter().map(|k| self.get(*k)).sum()
  }
}

// ---------------------------------------------------------------------------
// Risk level (derived from score)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
  VeryLow,
  Low,
  Medium,
  High,
}

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::VeryLow => "very_low",
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Result of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedImpactResult {
  pub impact_score: f64,
  pub risk_level: RiskLevel,
  pub confidence_level: u8,
}

/// How much one metric contributed to the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricContribution {
  pub metric: MetricKind,
  pub value: Option<f64>,
  pub normalized: f64,
  pub weight: f64,
  /// normalized * weight, on the 0..1 scale.
  pub contribution: f64,
}

/// Full response for one request: the result plus the reasoning behind it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(flatten)]
  pub result: ComputedImpactResult,
  pub missing_metrics: Vec<MetricKind>,
  pub breakdown: Vec<MetricContribution>,
  pub explanations: Vec<String>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
