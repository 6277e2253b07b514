//! Simulation parameters and their validation

use super::MAX_PERIODS;
use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};

/// Inputs to a contribution projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Balance at period 0
    #[serde(default)]
    pub initial_amount: f64,

    /// Added at the end of every period, after growth.
    /// Negative values are scheduled withdrawals.
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Fractional growth per period (0.008 = 0.8%)
    #[serde(default)]
    pub monthly_rate: f64,

    /// Number of monthly periods to project
    pub periods: u32,
}

impl SimulationParameters {
    pub fn new(
        initial_amount: f64,
        monthly_contribution: f64,
        monthly_rate: f64,
        periods: u32,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            monthly_rate,
            periods,
        }
    }

    /// Check every parameter before any computation happens.
    ///
    /// NaN fails the `>= 0.0` comparisons, so it is rejected with the sign checks.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !(self.monthly_rate >= 0.0) || !self.monthly_rate.is_finite() {
            return Err(ProjectionError::invalid("monthly_rate", "rate must be non-negative"));
        }
        if self.periods == 0 {
            return Err(ProjectionError::invalid(
                "periods",
                "period count must be a positive integer",
            ));
        }
        if self.periods > MAX_PERIODS {
            return Err(ProjectionError::invalid(
                "periods",
                "period count exceeds the 1200 month limit",
            ));
        }
        if !(self.initial_amount >= 0.0) || !self.initial_amount.is_finite() {
            return Err(ProjectionError::invalid(
                "initial_amount",
                "initial amount must be a non-negative number",
            ));
        }
        if !self.monthly_contribution.is_finite() {
            return Err(ProjectionError::invalid(
                "monthly_contribution",
                "contribution must be a finite number",
            ));
        }
        Ok(())
    }
}
