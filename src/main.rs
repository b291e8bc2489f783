//! Cleara Exam Whisperer · Study-Plan Backend
//!
//! - Axum HTTP API over a deterministic plan generator
//! - Static front-end (./static/index.html) with SPA fallback
//! - Optional TOML config for extra catalog subjects + settings
//!
//! Important env variables:
//!   PORT          : u16 (default 3000)
//!   PLANNER_CONFIG_PATH  : path to TOML config (subject bank + settings)
//!   PLAN_DELAY_MS  : artificial delay before generation (default 0)
//!   LOG_LEVEL    : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT      : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod error;
mod config;
mod catalog;
mod planner;
mod state;
mod protocol;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (subject catalog, presentation settings).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "whisperer_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
