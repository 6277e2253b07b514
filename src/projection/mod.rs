//! Projection engine for contribution and checkpoint projections

mod params;
mod engine;
mod series;
pub mod export;

pub use params::SimulationParameters;
pub use engine::{project, project_at_checkpoints, annual_to_monthly_rate};
pub use series::{ProjectionPoint, ProjectionResult, CheckpointValue, CheckpointProjection};

// ============================================================================
// Rate Conventions
// ============================================================================
// Annual rates on rate cards are quoted as percentages (12.5 = 12.5% a.a.).
// They are converted to a monthly fraction by simple division, not by taking
// the 12th root, so 12.5% a.a. becomes 0.0104166... per month.

/// Compounding periods per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Longest projection accepted (100 years of monthly periods).
/// Applies to `periods` and to every checkpoint.
pub const MAX_PERIODS: u32 = 1_200;
