//! Projection output types

use serde::{Deserialize, Serialize};

/// State of the account at the end of one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Period index, 0 = initial state
    pub period: u32,

    /// Account value after growth and contribution
    pub balance: f64,

    /// Initial amount plus every contribution up to and including this period
    pub cumulative_contributions: f64,
}

impl ProjectionPoint {
    /// Growth earned so far (balance above money put in)
    pub fn interest_to_date(&self) -> f64 {
        self.balance - self.cumulative_contributions
    }
}

/// Complete result of a contribution projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub final_balance: f64,
    pub total_contributed: f64,
    /// Always `final_balance - total_contributed`
    pub total_interest: f64,
    /// One point per period, `periods + 1` long
    pub series: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    /// Build the summary from a non-empty series
    pub(crate) fn from_series(series: Vec<ProjectionPoint>) -> Self {
        let (final_balance, total_contributed) = series
            .last()
            .map(|p| (p.balance, p.cumulative_contributions))
            .unwrap_or((0.0, 0.0));

        Self {
            final_balance,
            total_contributed,
            total_interest: final_balance - total_contributed,
            series,
        }
    }

    /// Number of projected periods (excluding period 0)
    pub fn periods(&self) -> u32 {
        self.series.last().map(|p| p.period).unwrap_or(0)
    }

    pub fn point(&self, period: u32) -> Option<&ProjectionPoint> {
        self.series.get(period as usize)
    }

    /// Serialize the whole result, series included
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Closed-form balance sampled at one checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckpointValue {
    pub period: u32,
    pub balance: f64,
}

/// Balances of a single amount at a set of checkpoint months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointProjection {
    pub amount: f64,
    /// Annual rate as quoted, in percent
    pub annual_rate_pct: f64,
    /// Derived periodic rate as a fraction
    pub monthly_rate: f64,
    /// In the order the checkpoints were requested
    pub points: Vec<CheckpointValue>,
}

impl CheckpointProjection {
    pub fn balance_at(&self, period: u32) -> Option<f64> {
        self.points.iter().find(|p| p.period == period).map(|p| p.balance)
    }

    /// Balance at the furthest checkpoint, whatever order they were requested in
    pub fn horizon_balance(&self) -> Option<f64> {
        self.points.iter().max_by_key(|p| p.period).map(|p| p.balance)
    }
}
