//! Application state: the subject catalog and presentation settings.
//!
//! Unlike a session-oriented service there is nothing mutable here: the
//! catalog is fixed at startup and every generation call is a pure
//! single-shot computation, so handlers share one immutable `AppState`
//! behind an `Arc` with no locking.

use std::time::Duration;

use tracing::{info, instrument};

use crate::catalog::SubjectCatalog;
use crate::config::{bank_from_config, load_planner_config_from_env};

pub struct AppState {
    pub catalog: SubjectCatalog,
    /// Artificial pre-generation delay (UI "thinking" simulation). Never
    /// part of the generator contract; zero disables it.
    pub plan_delay: Duration,
}

impl AppState {
    /// Build state from env: load config, merge the subject bank ahead of
    /// the built-in profiles, resolve the artificial delay.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_planner_config_from_env().unwrap_or_default();
        let bank = bank_from_config(&cfg);
        let catalog = SubjectCatalog::with_bank(bank);

        // Inventory summary so operators can confirm what the bank added.
        let (local_bank, built_in) = catalog.counts_by_source();
        info!(target: "planner", local_bank, built_in, "Startup catalog inventory");

        // PLAN_DELAY_MS beats the TOML setting when both are present.
        let delay_ms = std::env::var("PLAN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(cfg.settings.plan_delay_ms);
        if delay_ms > 0 {
            info!(target: "whisperer_backend", delay_ms, "Artificial plan delay enabled");
        }

        Self {
            catalog,
            plan_delay: Duration::from_millis(delay_ms),
        }
    }
}
