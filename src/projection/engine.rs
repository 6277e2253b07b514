//! Contribution and checkpoint projections
//!
//! Both operations are pure: they validate everything up front, then either
//! return a complete result or an error with nothing computed.

use super::params::SimulationParameters;
use super::series::{CheckpointProjection, CheckpointValue, ProjectionPoint, ProjectionResult};
use super::{MAX_PERIODS, MONTHS_PER_YEAR};
use crate::error::ProjectionError;

/// Convert an annual percentage (12.5 = 12.5% a.a.) to a monthly fraction
pub fn annual_to_monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / MONTHS_PER_YEAR
}

/// Project a balance month by month with a fixed contribution.
///
/// Each period grows the existing balance first and then adds the
/// contribution, so a contribution earns nothing in the period it is made.
pub fn project(params: &SimulationParameters) -> Result<ProjectionResult, ProjectionError> {
    params.validate()?;

    let growth = 1.0 + params.monthly_rate;
    let mut balance = params.initial_amount;
    let mut cumulative = params.initial_amount;

    let mut series = Vec::with_capacity(params.periods as usize + 1);
    series.push(ProjectionPoint {
        period: 0,
        balance,
        cumulative_contributions: cumulative,
    });

    for period in 1..=params.periods {
        balance = balance * growth + params.monthly_contribution;
        cumulative += params.monthly_contribution;
        series.push(ProjectionPoint {
            period,
            balance,
            cumulative_contributions: cumulative,
        });
    }

    Ok(ProjectionResult::from_series(series))
}

/// Closed-form value of `amount` at each checkpoint month, no contributions.
///
/// Agrees with `project` at zero contribution to floating-point tolerance.
pub fn project_at_checkpoints(
    amount: f64,
    annual_rate_pct: f64,
    checkpoints: &[u32],
) -> Result<CheckpointProjection, ProjectionError> {
    if !(amount >= 0.0) || !amount.is_finite() {
        return Err(ProjectionError::invalid(
            "amount",
            "amount must be a non-negative number",
        ));
    }
    if !(annual_rate_pct >= 0.0) || !annual_rate_pct.is_finite() {
        return Err(ProjectionError::invalid(
            "annual_rate_pct",
            "rate must be non-negative",
        ));
    }
    if checkpoints.is_empty() {
        return Err(ProjectionError::invalid(
            "checkpoints",
            "at least one checkpoint is required",
        ));
    }
    if checkpoints.iter().any(|&c| c > MAX_PERIODS) {
        return Err(ProjectionError::invalid(
            "checkpoints",
            "checkpoint exceeds the 1200 month limit",
        ));
    }

    let monthly_rate = annual_to_monthly_rate(annual_rate_pct);
    let growth = 1.0 + monthly_rate;

    let points = checkpoints
        .iter()
        .map(|&period| CheckpointValue {
            period,
            balance: amount * growth.powf(period as f64),
        })
        .collect();

    Ok(CheckpointProjection {
        amount,
        annual_rate_pct,
        monthly_rate,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(initial: f64, contribution: f64, rate: f64, periods: u32) -> SimulationParameters {
        SimulationParameters::new(initial, contribution, rate, periods)
    }

    #[test]
    fn test_rejects_zero_periods_and_negative_rate() {
        let zero_periods = project(&params(1_000.0, 100.0, 0.01, 0));
        assert!(matches!(
            zero_periods,
            Err(ProjectionError::InvalidParameter { param: "periods", .. })
        ));

        let negative_rate = project(&params(1_000.0, 100.0, -0.01, 12));
        assert!(matches!(
            negative_rate,
            Err(ProjectionError::InvalidParameter { param: "monthly_rate", .. })
        ));
    }

    #[test]
    fn test_rejects_period_count_above_limit() {
        assert!(matches!(
            project(&params(1.0, 0.0, 0.01, u32::MAX)),
            Err(ProjectionError::InvalidParameter { param: "periods", .. })
        ));
        assert!(matches!(
            project(&params(1.0, 0.0, 0.01, MAX_PERIODS + 1)),
            Err(ProjectionError::InvalidParameter { param: "periods", .. })
        ));

        let longest = project(&params(1.0, 0.0, 0.0, MAX_PERIODS)).unwrap();
        assert_eq!(longest.series.len(), MAX_PERIODS as usize + 1);
    }

    #[test]
    fn test_series_length_and_bounds() {
        for n in [1u32, 2, 12, 24, 360] {
            let result = project(&params(500.0, 25.0, 0.005, n)).unwrap();
            assert_eq!(result.series.len(), n as usize + 1);
            assert_eq!(result.series[0].period, 0);
            assert_eq!(result.series[n as usize].period, n);
            assert_eq!(result.periods(), n);
        }
    }

    #[test]
    fn test_no_contribution_matches_closed_form() {
        let initial = 2_500.0;
        let rate = 0.0075;
        let result = project(&params(initial, 0.0, rate, 120)).unwrap();

        for point in &result.series {
            let expected = initial * (1.0 + rate).powi(point.period as i32);
            assert_relative_eq!(point.balance, expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_checkpoints_match_iterative_engine() {
        let amount = 1_000.0;
        let annual = 18.5;
        for c in [1u32, 3, 6, 9, 12, 36] {
            let closed = project_at_checkpoints(amount, annual, &[c]).unwrap();
            let iterative = project(&params(amount, 0.0, annual / 100.0 / 12.0, c)).unwrap();
            assert_relative_eq!(
                closed.balance_at(c).unwrap(),
                iterative.series[c as usize].balance,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_interest_accounting_is_exact() {
        let cases = [
            params(10_000.0, 1_000.0, 0.008, 24),
            params(0.0, 250.0, 0.012, 60),
            params(5_000.0, -100.0, 0.004, 48),
            params(1_000.0, 0.0, 0.0, 12),
        ];

        for p in cases {
            let result = project(&p).unwrap();
            assert_eq!(result.total_interest, result.final_balance - result.total_contributed);
        }
    }

    #[test]
    fn test_contribution_accumulation() {
        let initial = 3_000.0;
        let contribution = 150.0;
        let result = project(&params(initial, contribution, 0.01, 36)).unwrap();

        for point in &result.series {
            let expected = initial + point.period as f64 * contribution;
            assert_relative_eq!(point.cumulative_contributions, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_scenario_monthly_contributions() {
        let result = project(&params(10_000.0, 1_000.0, 0.008, 24)).unwrap();

        assert_eq!(result.series[0].period, 0);
        assert_eq!(result.series[0].balance, 10_000.0);
        assert_eq!(result.series[0].cumulative_contributions, 10_000.0);
        assert_relative_eq!(result.series[1].balance, 11_080.0, max_relative = 1e-12);
        assert_relative_eq!(result.total_contributed, 34_000.0, max_relative = 1e-12);

        // Replay the recurrence independently
        let growth = 1.0 + 0.008;
        let mut balance = 10_000.0;
        for _ in 0..24 {
            balance = balance * growth + 1_000.0;
        }
        assert_eq!(result.final_balance, balance);
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn test_scenario_zero_rate() {
        let result = project(&params(1_000.0, 0.0, 0.0, 12)).unwrap();
        assert_eq!(result.final_balance, 1_000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_scenario_rate_card_checkpoints() {
        let projection = project_at_checkpoints(1_000.0, 12.5, &[3, 6, 9, 12]).unwrap();
        let monthly = 12.5 / 100.0 / 12.0;

        assert_eq!(projection.points.len(), 4);
        assert_relative_eq!(projection.monthly_rate, monthly);
        for c in [3u32, 6, 9, 12] {
            let expected = 1_000.0 * (1.0_f64 + monthly).powi(c as i32);
            assert_relative_eq!(projection.balance_at(c).unwrap(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_withdrawals_can_drop_below_contributions() {
        let result = project(&params(1_000.0, -200.0, 0.0, 10)).unwrap();
        assert_eq!(result.final_balance, -1_000.0);
        assert_eq!(result.total_contributed, -1_000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_checkpoint_validation() {
        assert!(matches!(
            project_at_checkpoints(-1.0, 10.0, &[3]),
            Err(ProjectionError::InvalidParameter { param: "amount", .. })
        ));
        assert!(matches!(
            project_at_checkpoints(100.0, -1.0, &[3]),
            Err(ProjectionError::InvalidParameter { param: "annual_rate_pct", .. })
        ));
        assert!(matches!(
            project_at_checkpoints(100.0, 10.0, &[]),
            Err(ProjectionError::InvalidParameter { param: "checkpoints", .. })
        ));

        assert!(matches!(
            project_at_checkpoints(100.0, 10.0, &[3, u32::MAX]),
            Err(ProjectionError::InvalidParameter { param: "checkpoints", .. })
        ));
        assert!(project_at_checkpoints(100.0, 10.0, &[MAX_PERIODS]).is_ok());

        // Checkpoint 0 is "today"
        let today = project_at_checkpoints(100.0, 10.0, &[0]).unwrap();
        assert_eq!(today.balance_at(0), Some(100.0));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let p = params(7_500.0, 300.0, 0.0065, 48);
        assert_eq!(project(&p).unwrap(), project(&p).unwrap());
    }
}
