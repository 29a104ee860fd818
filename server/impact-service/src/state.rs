//! Shared application state.

use impact_engine::Engine;
use sqlx_postgres::PgPool;

pub struct AppState {
  pub engine: Engine,
  /// None when DATABASE_URL is unset; persistence endpoints then return 503.
  pub pool: Option<PgPool>,
}

impl AppState {
  pub fn new(engine: Engine, pool: Option<PgPool>) -> Self {
    Self { engine, pool }
  }
}
