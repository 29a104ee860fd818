//! JSON-lines protocol: one ScoreRequest per input line, one JSON object per output line.

use crate::engine::Engine;
use crate::error::EngineError;
use crate::types::{ErrorOutput, ScoreRequest};

/// Handle one input line. Returns `None` for blank lines, otherwise the
/// serialized ImpactReport or ErrorOutput.
pub fn handle_line(engine: &Engine, line: &str) -> Option<String> {
  let trimmed = line.trim();
  if trimmed.is_empty() {
    return None;
  }

  let req: ScoreRequest = match serde_json::from_str(trimmed).map_err(EngineError::from) {
    Ok(v) => v,
    Err(e) => {
      tracing::warn!(error = %e, "rejecting unparseable line");
      return Some(encode_error(&error_output(&e)));
    }
  };

  let encoded = match engine.score(&req) {
    Ok(report) => serde_json::to_string(&report),
    Err(e) => {
      tracing::warn!(error = %e, "rejecting invalid request");
      return Some(encode_error(&error_output(&e)));
    }
  };

  Some(encoded.unwrap_or_else(|e| encode_error(&ErrorOutput::new(format!("json encode: {}", e)))))
}

/// Map an engine error to its wire form.
pub fn error_output(e: &EngineError) -> ErrorOutput {
  match e {
    EngineError::Validation { field, reason } => ErrorOutput::new(reason.clone()).with_field(field.clone()),
    _ => ErrorOutput::new(e.to_string()),
  }
}

fn encode_error(err: &ErrorOutput) -> String {
  // ErrorOutput holds only strings and a bool; serialization cannot fail.
  serde_json::to_string(err).unwrap_or_else(|_| r#"{"error":true,"message":"internal"}"#.to_string())
}
