//! Investment option rate cards and quick simulations

mod options;
mod simulation;

pub use options::{
    InvestmentCatalog, InvestmentCategory, InvestmentOption, RiskBand, RiskLevel, Term,
};
pub use simulation::{checkpoint_label, QuickSimulation, DEFAULT_CHECKPOINTS};
