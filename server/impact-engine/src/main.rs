//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a ScoreRequest. Each non-blank line produces exactly one
//! output line: an ImpactReport, or an ErrorOutput when the line is invalid.
//! Logs go to stderr (RUST_LOG, default `warn`).

use impact_engine::{stream, Config, Engine};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let engine = match Config::from_env().and_then(Engine::new) {
    Ok(e) => e,
    Err(e) => {
      tracing::error!(error = %e, "invalid configuration");
      let _ = writeln!(io::stderr(), "impact-engine: {}", e);
      std::process::exit(2);
    }
  };

  if let Err(e) = run(&engine) {
    let _ = writeln!(io::stderr(), "impact-engine: read error: {}", e);
    std::process::exit(1);
  }
}

fn run(engine: &Engine) -> io::Result<()> {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let mut scored = 0usize;
  for line in stdin.lock().lines() {
    let line = line?;
    if let Some(json) = stream::handle_line(engine, &line) {
      writeln!(out, "{}", json)?;
      scored += 1;
    }
  }

  tracing::info!(lines = scored, "done");
  out.flush()
}
