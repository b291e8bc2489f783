//! Loading planner configuration (extra catalog subjects + settings) from TOML.
//!
//! See `PlannerConfig` for the expected schema. Everything is optional: with
//! no config file the built-in catalog and default settings apply.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{SubjectProfile, VivaPair};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct PlannerConfig {
  #[serde(default)]
  pub settings: Settings,
  #[serde(default)]
  pub subjects: Vec<SubjectCfg>,
}

/// Tunables that are the caller's concern, not the generator's.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct Settings {
  /// Artificial delay before generation, to simulate "thinking" in the UI.
  /// Zero (the default) keeps the endpoint instantaneous.
  #[serde(default)]
  pub plan_delay_ms: u64,
}

/// Subject entry accepted in TOML configuration. Topics are mandatory for a
/// usable profile; the other lists may be left empty.
#[derive(Clone, Debug, Deserialize)]
pub struct SubjectCfg {
  pub key: String,
  pub topics: Vec<String>,
  #[serde(default)] pub notes: Vec<String>,
  #[serde(default)] pub mistakes: Vec<String>,
  #[serde(default)] pub viva: Vec<VivaPair>,
}

impl SubjectCfg {
  pub fn into_profile(self) -> (String, SubjectProfile) {
    (
      self.key,
      SubjectProfile {
        topics: self.topics,
        notes: self.notes,
        mistakes: self.mistakes,
        viva: self.viva,
      },
    )
  }
}

/// Subject bank from the config, dropping unusable entries (blank key or no
/// topics) with a logged reason.
pub fn bank_from_config(cfg: &PlannerConfig) -> Vec<(String, SubjectProfile)> {
  let mut bank = Vec::with_capacity(cfg.subjects.len());
  for sc in &cfg.subjects {
    if sc.key.trim().is_empty() || sc.topics.is_empty() {
      error!(target: "planner", key = %sc.key, "Skipping bank subject: missing key or topics.");
      continue;
    }
    bank.push(sc.clone().into_profile());
  }
  bank
}

/// Attempt to load `PlannerConfig` from PLANNER_CONFIG_PATH. On any
/// parsing/IO error, returns None.
pub fn load_planner_config_from_env() -> Option<PlannerConfig> {
  let path = std::env::var("PLANNER_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<PlannerConfig>(&s) {
      Ok(cfg) => {
        info!(target: "whisperer_backend", %path, "Loaded planner config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "whisperer_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "whisperer_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
