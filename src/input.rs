//! Raw form input to validated simulation parameters
//!
//! Form fields arrive as text. Whether blank or unreadable text is an error or
//! silently becomes zero is the caller's choice, made through `ParsePolicy`.

use crate::error::ProjectionError;
use crate::projection::SimulationParameters;
use log::warn;
use serde::{Deserialize, Serialize};

/// How to treat numeric text that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Blank or unreadable text is a `Parse` error
    #[default]
    Strict,
    /// Blank or unreadable text becomes 0, with a warning logged
    DefaultToZero,
}

/// Simulator form fields as entered.
///
/// Numbers take one decimal separator, either `.` or `,` ("12,5" = 12.5).
/// Digit grouping is not accepted: text such as "1,000", "10.000" or
/// "1.234,56" is a `Parse` error under every policy, since reading it either
/// way risks a 1000x error on an amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub initial_amount: String,

    #[serde(default)]
    pub monthly_contribution: String,

    /// Monthly rate in percent ("0.8" = 0.8% per month)
    #[serde(default)]
    pub monthly_rate_pct: String,

    #[serde(default)]
    pub periods: String,
}

impl FormInput {
    pub fn new(
        initial_amount: impl Into<String>,
        monthly_contribution: impl Into<String>,
        monthly_rate_pct: impl Into<String>,
        periods: impl Into<String>,
    ) -> Self {
        Self {
            initial_amount: initial_amount.into(),
            monthly_contribution: monthly_contribution.into(),
            monthly_rate_pct: monthly_rate_pct.into(),
            periods: periods.into(),
        }
    }

    /// Parse every field and validate the resulting parameters
    pub fn parse(&self, policy: ParsePolicy) -> Result<SimulationParameters, ProjectionError> {
        let initial_amount = parse_number("initial_amount", &self.initial_amount, policy)?;
        let monthly_contribution =
            parse_number("monthly_contribution", &self.monthly_contribution, policy)?;
        let monthly_rate_pct =
            parse_number("monthly_rate_pct", &self.monthly_rate_pct, policy)?;
        let periods = parse_periods(&self.periods, policy)?;

        let params = SimulationParameters {
            initial_amount,
            monthly_contribution,
            monthly_rate: monthly_rate_pct / 100.0,
            periods,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Parse a currency amount typed into a form
pub fn parse_amount(text: &str, policy: ParsePolicy) -> Result<f64, ProjectionError> {
    parse_number("amount", text, policy)
}

fn parse_number(
    field: &'static str,
    text: &str,
    policy: ParsePolicy,
) -> Result<f64, ProjectionError> {
    let trimmed = text.trim();
    if looks_grouped(trimmed) {
        return Err(ProjectionError::Parse {
            field,
            input: text.to_string(),
        });
    }

    // Accept a decimal comma ("12,5") as typed in pt-BR forms
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => fallback(field, text, policy).map(|_| 0.0),
    }
}

fn parse_periods(text: &str, policy: ParsePolicy) -> Result<u32, ProjectionError> {
    match text.trim().parse::<i64>() {
        Ok(n) if n <= 0 => Err(ProjectionError::invalid(
            "periods",
            "period count must be a positive integer",
        )),
        Ok(n) => u32::try_from(n)
            .map_err(|_| ProjectionError::invalid("periods", "period count is too large")),
        Err(_) => fallback("periods", text, policy).map(|_| 0),
    }
}

/// True for text with thousands grouping ("1,000", "10.000", "1.234,56").
///
/// A single separator followed by exactly three digits counts as grouping
/// unless the integer part is zero ("0.125" is a plain decimal).
fn looks_grouped(text: &str) -> bool {
    let is_separator = |c: char| c == ',' || c == '.';
    match text.matches(is_separator).count() {
        0 => false,
        1 => {
            let Some(pos) = text.find(is_separator) else {
                return false;
            };
            let whole = text[..pos].trim_start_matches(['-', '+']);
            let fraction = &text[pos + 1..];
            fraction.len() == 3
                && fraction.bytes().all(|b| b.is_ascii_digit())
                && !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && !whole.starts_with('0')
        }
        _ => true,
    }
}

fn fallback(field: &'static str, text: &str, policy: ParsePolicy) -> Result<(), ProjectionError> {
    match policy {
        ParsePolicy::Strict => Err(ProjectionError::Parse {
            field,
            input: text.to_string(),
        }),
        ParsePolicy::DefaultToZero => {
            warn!("{field}: could not parse {text:?}, using 0");
            Ok(())
        }
    }
}
