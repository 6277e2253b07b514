//! Investment Simulator - compound-interest projection engine for personal-finance planning
//!
//! This library provides:
//! - Month-by-month balance projections with periodic contributions
//! - Closed-form checkpoint projections for rate-card quick simulations
//! - An investment option catalog with minimum-amount checks
//! - Parsing of raw form input into validated simulation parameters
//! - CSV/JSON export of projection series

pub mod error;
pub mod projection;
pub mod input;
pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use error::ProjectionError;
pub use projection::{
    project, project_at_checkpoints, ProjectionPoint, ProjectionResult, SimulationParameters,
    CheckpointProjection, CheckpointValue,
};
pub use catalog::{InvestmentCatalog, InvestmentOption, QuickSimulation};
pub use config::SimulatorConfig;
