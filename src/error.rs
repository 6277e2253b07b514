//! Error taxonomy for projections, input parsing and export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A parameter is outside the range the projection accepts
    #[error("invalid parameter `{param}`: {reason}")]
    InvalidParameter {
        param: &'static str,
        reason: &'static str,
    },

    /// Raw form text could not be read as a number
    #[error("could not parse `{field}` from {input:?}")]
    Parse { field: &'static str, input: String },

    /// Quick simulation amount is under the option's minimum
    #[error("{option}: minimum amount is {minimum:.2}, got {amount:.2}")]
    BelowMinimum {
        option: String,
        minimum: f64,
        amount: f64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    pub(crate) fn invalid(param: &'static str, reason: &'static str) -> Self {
        ProjectionError::InvalidParameter { param, reason }
    }
}
