//! Awareness Impact Scoring Engine — deterministic weighted scoring.
//!
//! Maps four optional 0-100 sub-scores (engagement, completion, feedback
//! quality, compliance linkage) to an impact score, a risk level, and a
//! confidence estimate. Used by the binary for stdin/stdout; can also be
//! called as a library (the HTTP service does).
//!
//! No AI, no DB, no network; pure computation.

pub mod config;
pub mod engine;
pub mod error;
pub mod score;
pub mod stream;
pub mod types;
pub mod weights;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use score::compute_impact_score;
pub use types::{ComputedImpactResult, ImpactReport, InputMetrics, RiskLevel, ScoreRequest, Weights};
pub use weights::validate_weights;
