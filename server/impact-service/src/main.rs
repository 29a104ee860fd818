//! Binary entrypoint for the impact service.

use impact_engine::{Config, Engine};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use impact_service::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5005".into())
    .parse()?;

  let engine = Engine::new(Config::from_env()?)?;

  let pool = match std::env::var("DATABASE_URL") {
    Ok(url) if !url.is_empty() => Some(sqlx_postgres::PgPool::connect(&url).await?),
    _ => {
      tracing::warn!("DATABASE_URL not set; campaign persistence disabled");
      None
    }
  };

  let app = router(Arc::new(AppState::new(engine, pool)));

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  tracing::info!("impact-service listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
