//! Simulator configuration
//!
//! Every field has a default, so a partial JSON file (or none at all) is valid.

use crate::catalog::DEFAULT_CHECKPOINTS;
use crate::error::ProjectionError;
use crate::input::ParsePolicy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Months sampled by quick simulations
    #[serde(default = "default_checkpoints")]
    pub checkpoints: Vec<u32>,

    /// Amount pre-filled in the quick simulation form
    #[serde(default = "default_amount")]
    pub default_amount: f64,

    /// How unreadable form text is handled
    #[serde(default)]
    pub parse_policy: ParsePolicy,
}

fn default_checkpoints() -> Vec<u32> { DEFAULT_CHECKPOINTS.to_vec() }
fn default_amount() -> f64 { 1_000.0 }

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            checkpoints: default_checkpoints(),
            default_amount: default_amount(),
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ProjectionError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProjectionError> {
        let path = path.as_ref();
        debug!("Loading simulator config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.checkpoints.is_empty() {
            return Err(ProjectionError::invalid(
                "checkpoints",
                "at least one checkpoint is required",
            ));
        }
        if !(self.default_amount >= 0.0) || !self.default_amount.is_finite() {
            return Err(ProjectionError::invalid(
                "default_amount",
                "amount must be a non-negative number",
            ));
        }
        Ok(())
    }
}
