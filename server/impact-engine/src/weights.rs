//! Weight validation. The calculator itself accepts any weights; callers
//! check them here before scoring.

use crate::error::EngineError;
use crate::types::{MetricKind, Weights};

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Float slack so sums landing exactly on 1.0 ± WEIGHT_SUM_TOLERANCE pass.
const SUM_EPSILON: f64 = 1e-9;

/// Each weight finite and in [0, 1]; sum within 1.0 ± WEIGHT_SUM_TOLERANCE.
pub fn validate_weights(weights: &Weights) -> Result<(), EngineError> {
  for kind in MetricKind::ALL {
    let w = weights.get(kind);
    if !w.is_finite() {
      return Err(EngineError::validation(kind.weight_field(), "must be a finite number"));
    }
    if !(0.0..=1.0).contains(&w) {
      return Err(EngineError::validation(
        kind.weight_field(),
        format!("must be between 0 and 1, got {}", w),
      ));
    }
  }

  let sum = weights.sum();
  if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE + SUM_EPSILON {
    return Err(EngineError::validation(
      "weights",
      format!("must sum to 1.0 (±{}), got {:.4}", WEIGHT_SUM_TOLERANCE, sum),
    ));
  }
  Ok(())
}
