//! Quick simulation of an amount against one rate card

use super::options::InvestmentOption;
use crate::error::ProjectionError;
use crate::projection::{project_at_checkpoints, CheckpointProjection};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Months sampled by a quick simulation; 0 is the amount today
pub const DEFAULT_CHECKPOINTS: [u32; 5] = [0, 3, 6, 9, 12];

/// Chart label for a checkpoint
pub fn checkpoint_label(period: u32) -> String {
    if period == 0 {
        "Today".to_string()
    } else {
        format!("{period}m")
    }
}

/// Result card of a quick simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSimulation {
    pub option_id: u32,
    pub option_name: String,
    pub amount: f64,
    pub annual_rate_pct: f64,
    pub projection: CheckpointProjection,
    /// Balance at the furthest checkpoint
    pub final_value: f64,
    /// `final_value - amount`
    pub profit: f64,
}

impl QuickSimulation {
    /// (label, balance) pairs in checkpoint order, ready for a chart
    pub fn chart_points(&self) -> Vec<(String, f64)> {
        self.projection
            .points
            .iter()
            .map(|p| (checkpoint_label(p.period), p.balance))
            .collect()
    }
}

impl InvestmentOption {
    /// Project `amount` at each checkpoint using this option's rate.
    ///
    /// Amounts under `min_amount` are rejected before anything is computed.
    pub fn simulate(
        &self,
        amount: f64,
        checkpoints: &[u32],
    ) -> Result<QuickSimulation, ProjectionError> {
        if !self.accepts(amount) {
            info!("{}: amount {:.2} below minimum {:.2}", self.name, amount, self.min_amount);
            return Err(ProjectionError::BelowMinimum {
                option: self.name.clone(),
                minimum: self.min_amount,
                amount,
            });
        }

        let projection = project_at_checkpoints(amount, self.annual_rate_pct, checkpoints)?;
        let final_value = projection.horizon_balance().unwrap_or(amount);

        debug!(
            "{}: {:.2} at {}% a.a. -> {:.2} after {} checkpoints",
            self.name,
            amount,
            self.annual_rate_pct,
            final_value,
            checkpoints.len()
        );

        Ok(QuickSimulation {
            option_id: self.id,
            option_name: self.name.clone(),
            amount,
            annual_rate_pct: self.annual_rate_pct,
            projection,
            final_value,
            profit: final_value - amount,
        })
    }
}
