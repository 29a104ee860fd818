//! Integration tests for the impact engine.

use impact_engine::stream::handle_line;
use impact_engine::types::MetricKind;
use impact_engine::{compute_impact_score, Config, Engine, InputMetrics, RiskLevel, ScoreRequest, Weights};

fn fixture_request() -> ScoreRequest {
  let json = r#"{
    "id": "q3-phishing-campaign",
    "metrics": {
      "engagementScore": 80,
      "completionScore": 70,
      "feedbackQualityScore": 85,
      "complianceLinkageScore": null
    }
  }"#;
  serde_json::from_str(json).unwrap()
}

#[test]
fn one_missing_metric_report() {
  let engine = Engine::with_defaults();
  let report = engine.score(&fixture_request()).unwrap();

  assert!((report.result.impact_score - 58.75).abs() < 1e-9);
  assert_eq!(report.result.risk_level, RiskLevel::Medium);
  assert_eq!(report.result.confidence_level, 80);
  assert_eq!(report.missing_metrics, vec![MetricKind::ComplianceLinkage]);
  assert_eq!(report.id.as_deref(), Some("q3-phishing-campaign"));
  assert!(report.explanations.iter().any(|e| e.contains("Compliance linkage")));
}

#[test]
fn report_json_has_flat_result_fields() {
  let engine = Engine::with_defaults();
  let report = engine.score(&fixture_request()).unwrap();
  let v = serde_json::to_value(&report).unwrap();

  assert_eq!(v["impactScore"], 58.75);
  assert_eq!(v["riskLevel"], "medium");
  assert_eq!(v["confidenceLevel"], 80);
  assert_eq!(v["missingMetrics"][0], "compliance_linkage");
  assert_eq!(v["breakdown"].as_array().unwrap().len(), 4);
}

#[test]
fn breakdown_sums_to_unrounded_score() {
  let engine = Engine::with_defaults();
  let report = engine.score(&fixture_request()).unwrap();
  let total: f64 = report.breakdown.iter().map(|c| c.contribution).sum();
  assert!((total * 100.0 - report.result.impact_score).abs() < 0.005);
}

#[test]
fn deterministic_output_across_runs() {
  let line = r#"{"metrics": {"engagementScore": 33.3, "completionScore": 66.6, "feedbackQualityScore": 12, "complianceLinkageScore": 99}}"#;

  let a = handle_line(&Engine::with_defaults(), line).unwrap();
  let b = handle_line(&Engine::with_defaults(), line).unwrap();
  assert_eq!(a, b, "Same inputs must produce identical JSON output");
}

#[test]
fn unknown_fields_are_ignored() {
  let line = r#"{
    "metrics": {"engagementScore": 100, "completionScore": 100, "feedbackQualityScore": 100, "complianceLinkageScore": 100, "extra": 1},
    "campaign_name": "ignored"
  }"#
  .replace('\n', " ");
  let out = handle_line(&Engine::with_defaults(), &line).unwrap();
  let v: serde_json::Value = serde_json::from_str(&out).unwrap();
  assert_eq!(v["impactScore"], 100.0);
  assert_eq!(v["riskLevel"], "very_low");
  assert_eq!(v["confidenceLevel"], 90);
}

#[test]
fn all_metrics_missing() {
  let out = handle_line(&Engine::with_defaults(), r#"{"metrics": {}}"#).unwrap();
  let v: serde_json::Value = serde_json::from_str(&out).unwrap();
  assert_eq!(v["impactScore"], 0.0);
  assert_eq!(v["riskLevel"], "high");
  assert_eq!(v["confidenceLevel"], 50);
}

#[test]
fn missing_metrics_object_gives_clear_error() {
  let out = handle_line(&Engine::with_defaults(), r#"{"id": "x"}"#).unwrap();
  let v: serde_json::Value = serde_json::from_str(&out).unwrap();
  assert_eq!(v["error"], true);
  assert!(
    v["message"].as_str().unwrap().contains("metrics"),
    "Error should mention the field: {}",
    v["message"]
  );
}

#[test]
fn configured_weights_apply_to_every_request() {
  let config = Config::from_toml_str(
    r#"
    [weights]
    engagement = 0.1
    completion = 0.1
    feedback_quality = 0.1
    compliance_linkage = 0.7
    "#,
  )
  .unwrap();
  let engine = Engine::new(config).unwrap();
  let r = engine.compute(&InputMetrics::new(Some(0.0), Some(0.0), Some(0.0), Some(100.0)));
  assert_eq!(r.impact_score, 70.0);
  assert_eq!(r.risk_level, RiskLevel::Low);
}

#[test]
fn free_function_matches_engine_defaults() {
  let m = InputMetrics::new(Some(12.0), None, Some(64.0), Some(41.5));
  let engine = Engine::with_defaults();
  assert_eq!(engine.compute(&m), compute_impact_score(&m, &Weights::default()));
}
