//! Engine configuration with sane defaults, optionally loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;
use crate::types::Weights;
use crate::weights::validate_weights;

/// Env var naming a TOML config file.
pub const CONFIG_ENV: &str = "IMPACT_ENGINE_CONFIG";

/// Lower bounds (inclusive) of each risk band on the 0-100 score scale.
/// Anything below `medium` is high risk.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
  pub medium: f64,
  pub low: f64,
  pub very_low: f64,
}

impl Default for RiskThresholds {
  fn default() -> Self {
    Self {
      medium: 40.0,
      low: 70.0,
      very_low: 85.0,
    }
  }
}

/// Confidence heuristic: start at `base`, lose `penalty_per_missing` per
/// missing metric, clamp to [min, max].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfidencePolicy {
  pub base: u8,
  pub penalty_per_missing: u8,
  pub min: u8,
  pub max: u8,
}

impl Default for ConfidencePolicy {
  fn default() -> Self {
    Self {
      base: 90,
      penalty_per_missing: 10,
      min: 50,
      max: 99,
    }
  }
}

/// Tunable parameters for impact scoring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Weights used when a request carries none.
  pub weights: Weights,
  pub risk_thresholds: RiskThresholds,
  pub confidence: ConfidencePolicy,
  /// Whether requests may supply their own weights.
  pub allow_weight_override: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      weights: Weights::default(),
      risk_thresholds: RiskThresholds::default(),
      confidence: ConfidencePolicy::default(),
      allow_weight_override: true,
    }
  }
}

impl Config {
  /// Parse and validate a TOML document. Missing keys take defaults.
  pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
    let config: Config = toml::from_str(s).map_err(|e| EngineError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
      .map_err(|e| EngineError::config(format!("cannot read {}: {}", path.display(), e)))?;
    Self::from_toml_str(&raw)
  }

  /// Load from the file named by `IMPACT_ENGINE_CONFIG`, or defaults when unset.
  pub fn from_env() -> Result<Self, EngineError> {
    match std::env::var(CONFIG_ENV) {
      Ok(path) if !path.trim().is_empty() => {
        tracing::info!(path = %path, "loading impact engine config");
        Self::load(path.trim())
      }
      _ => Ok(Self::default()),
    }
  }

  pub fn validate(&self) -> Result<(), EngineError> {
    validate_weights(&self.weights)?;

    let t = &self.risk_thresholds;
    let ordered = 0.0 < t.medium && t.medium < t.low && t.low < t.very_low && t.very_low <= 100.0;
    if !ordered {
      return Err(EngineError::validation(
        "risk_thresholds",
        "must satisfy 0 < medium < low < very_low <= 100",
      ));
    }

    let c = &self.confidence;
    if !(c.min <= c.base && c.base <= c.max && c.max <= 100) {
      return Err(EngineError::validation(
        "confidence",
        "must satisfy min <= base <= max <= 100",
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
  }

  #[test]
  fn empty_toml_gives_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
  }

  #[test]
  fn partial_toml_overrides_only_given_keys() {
    let config = Config::from_toml_str(
      r#"
      allow_weight_override = false

      [weights]
      engagement = 0.4
      completion = 0.2
      feedback_quality = 0.2
      compliance_linkage = 0.2

      [confidence]
      base = 95
      "#,
    )
    .unwrap();
    assert!(!config.allow_weight_override);
    assert_eq!(config.weights.engagement, 0.4);
    assert_eq!(config.confidence.base, 95);
    assert_eq!(config.confidence.min, 50);
    assert_eq!(config.risk_thresholds, RiskThresholds::default());
  }

  #[test]
  fn bad_weights_in_toml_are_rejected() {
    let err = Config::from_toml_str("[weights]\nengagement = 0.9\n").unwrap_err();
    assert_eq!(err.field(), Some("weights"));
  }

  #[test]
  fn unordered_thresholds_are_rejected() {
    let err = Config::from_toml_str("[risk_thresholds]\nmedium = 75\n").unwrap_err();
    assert_eq!(err.field(), Some("risk_thresholds"));
  }

  #[test]
  fn malformed_toml_is_a_config_error() {
    let err = Config::from_toml_str("weights = [").unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
  }

  #[test]
  fn missing_file_is_a_config_error() {
    let err = Config::load("/nonexistent/impact-engine.toml").unwrap_err();
    assert!(err.to_string().contains("cannot read"));
  }
}
