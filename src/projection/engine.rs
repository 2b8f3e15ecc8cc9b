//! Core projection engine for SIP future-value calculations

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::plan::{Plan, Schedule};
use super::series::{GrowthSeries, SeriesPoint};

/// Default inflation offset: percentage points subtracted from the nominal
/// annual rate when a plan requests inflation adjustment
pub const DEFAULT_INFLATION_OFFSET_PCT: f64 = 5.0;

/// A per-period rate this close to zero is treated as exactly zero to keep
/// the annuity formula defined
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Percentage points subtracted from the nominal rate for
    /// inflation-adjusted plans
    pub inflation_offset_pct: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            inflation_offset_pct: DEFAULT_INFLATION_OFFSET_PCT,
        }
    }
}

/// Headline projection outcome for a single plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Sum of all contributions over the horizon
    pub total_invested: f64,

    /// Projected value of contributions plus compounded growth
    pub future_value: f64,
}

impl ProjectionResult {
    /// Growth component of the projection (may be negative when the
    /// effective rate is negative)
    pub fn estimated_returns(&self) -> f64 {
        self.future_value - self.total_invested
    }
}

/// Main projection engine
///
/// Every method is a pure function of the plan and the engine config;
/// repeated calls with the same inputs produce bit-identical results.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Create an engine with the default 5% inflation offset
    pub fn with_defaults() -> Self {
        Self::new(ProjectionConfig::default())
    }

    /// Run the projection for a single plan over its full horizon
    pub fn project(&self, plan: &Plan) -> ProjectionResult {
        let n = plan.total_periods();
        ProjectionResult {
            total_invested: self.invested_after(plan, n),
            future_value: self.value_after(plan, n),
        }
    }

    /// Build the per-period growth series used for the line chart
    ///
    /// One point per elapsed sub-period (per year for OneTime), dated from
    /// `start`. The projected sequence is non-decreasing whenever the
    /// effective rate is non-negative.
    pub fn growth_series(&self, plan: &Plan, start: NaiveDate) -> GrowthSeries {
        let months_per_period = plan.schedule.months_per_period();
        let points = (1..=plan.total_periods())
            .map(|k| SeriesPoint {
                period_index: k,
                date: start
                    .checked_add_months(Months::new(k * months_per_period))
                    .unwrap_or(NaiveDate::MAX),
                cumulative_invested: self.invested_after(plan, k),
                projected_value: self.value_after(plan, k),
            })
            .collect();

        GrowthSeries {
            schedule: plan.schedule,
            points,
        }
    }

    /// Effective annual rate in percent, after optional inflation adjustment
    pub fn effective_annual_rate_pct(&self, plan: &Plan) -> f64 {
        if plan.adjust_for_inflation {
            plan.annual_rate_pct - self.config.inflation_offset_pct
        } else {
            plan.annual_rate_pct
        }
    }

    /// Per-sub-period rate as a decimal
    fn periodic_rate(&self, plan: &Plan) -> f64 {
        self.effective_annual_rate_pct(plan) / 100.0 / plan.schedule.periods_per_year() as f64
    }

    /// Cumulative amount contributed after `elapsed` sub-periods
    fn invested_after(&self, plan: &Plan, elapsed: u32) -> f64 {
        match plan.schedule {
            // Lump sum is fully invested at inception
            Schedule::OneTime => plan.contribution,
            Schedule::Monthly | Schedule::Quarterly => plan.contribution * elapsed as f64,
        }
    }

    /// Future value after `elapsed` sub-periods
    ///
    /// Periodic schedules use the future-value-of-an-annuity-due formula:
    /// deposits at the start of each period, compounded at the periodic
    /// rate. A degenerate (zero) rate reduces to the invested total instead
    /// of dividing by zero.
    fn value_after(&self, plan: &Plan, elapsed: u32) -> f64 {
        let n = elapsed as f64;
        match plan.schedule {
            Schedule::OneTime => {
                let r = self.effective_annual_rate_pct(plan) / 100.0;
                plan.contribution * (1.0 + r).powf(n)
            }
            Schedule::Monthly | Schedule::Quarterly => {
                let r = self.periodic_rate(plan);
                if r.abs() < ZERO_RATE_EPSILON {
                    log::debug!("degenerate periodic rate, projecting without growth");
                    plan.contribution * n
                } else {
                    plan.contribution * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r)
                }
            }
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn monthly_plan() -> Plan {
        Plan::new(2000.0, 4, 12.0, false, Schedule::Monthly).unwrap()
    }

    #[test]
    fn test_monthly_reference_scenario() {
        // 2000/month, 4 years, 12% annual: n=48, r=0.01
        let engine = ProjectionEngine::with_defaults();
        let result = engine.project(&monthly_plan());

        assert_eq!(result.total_invested, 2000.0 * 48.0);

        let expected = 2000.0 * ((1.01f64.powf(48.0) - 1.0) / 0.01) * 1.01;
        assert_relative_eq!(result.future_value, expected, max_relative = 1e-12);
        assert!((result.future_value - 123_670.0).abs() < 10.0);
    }

    #[test]
    fn test_one_time_reference_scenario() {
        // 24000 lump sum, 4 years, 12% annual
        let engine = ProjectionEngine::with_defaults();
        let plan = Plan::new(24000.0, 4, 12.0, false, Schedule::OneTime).unwrap();
        let result = engine.project(&plan);

        assert_eq!(result.total_invested, 24000.0);
        assert_relative_eq!(result.future_value, 24000.0 * 1.12f64.powf(4.0));
        assert!((result.future_value - 37_764.46).abs() < 0.01);
    }

    #[test]
    fn test_quarterly_invested_total_exact() {
        let engine = ProjectionEngine::with_defaults();
        let plan = Plan::new(6000.0, 10, 8.0, false, Schedule::Quarterly).unwrap();
        let result = engine.project(&plan);

        // Contribution is per compounding period, so invested = c * n exactly
        assert_eq!(result.total_invested, 6000.0 * 40.0);

        let r: f64 = 0.08 / 4.0;
        let expected = 6000.0 * (((1.0 + r).powf(40.0) - 1.0) / r) * (1.0 + r);
        assert_relative_eq!(result.future_value, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_boundary() {
        // Rate equal to the inflation offset: the annuity formula would
        // divide by zero without the degenerate-rate guard
        let engine = ProjectionEngine::with_defaults();
        let plan = Plan::new(2000.0, 4, 5.0, true, Schedule::Monthly).unwrap();
        let result = engine.project(&plan);

        assert!(result.future_value.is_finite());
        assert_eq!(result.future_value, 2000.0 * 48.0);
        assert_eq!(result.estimated_returns(), 0.0);
    }

    #[test]
    fn test_zero_rate_one_time() {
        let engine = ProjectionEngine::with_defaults();
        let plan = Plan::new(24000.0, 4, 5.0, true, Schedule::OneTime).unwrap();
        let result = engine.project(&plan);

        assert_eq!(result.future_value, 24000.0);
    }

    #[test]
    fn test_inflation_adjustment_reduces_value() {
        let engine = ProjectionEngine::with_defaults();
        let nominal = engine.project(&monthly_plan());

        let adjusted_plan = Plan::new(2000.0, 4, 12.0, true, Schedule::Monthly).unwrap();
        let adjusted = engine.project(&adjusted_plan);

        assert_eq!(engine.effective_annual_rate_pct(&adjusted_plan), 7.0);
        assert!(adjusted.future_value < nominal.future_value);
        assert_eq!(adjusted.total_invested, nominal.total_invested);
    }

    #[test]
    fn test_future_value_dominates_invested_for_positive_rate() {
        let engine = ProjectionEngine::with_defaults();
        for schedule in [Schedule::Monthly, Schedule::Quarterly, Schedule::OneTime] {
            let plan = Plan::new(1500.0, 7, 9.5, false, schedule).unwrap();
            let result = engine.project(&plan);
            assert!(
                result.future_value >= result.total_invested,
                "{:?}: fv {} < invested {}",
                schedule,
                result.future_value,
                result.total_invested
            );
        }
    }

    #[test]
    fn test_negative_effective_rate_shrinks_value() {
        // 3% nominal with the 5% offset gives a -2% effective rate
        let engine = ProjectionEngine::with_defaults();
        let plan = Plan::new(2000.0, 4, 3.0, true, Schedule::Monthly).unwrap();
        let result = engine.project(&plan);

        assert!(result.future_value < result.total_invested);
        assert!(result.estimated_returns() < 0.0);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let engine = ProjectionEngine::with_defaults();
        let plan = monthly_plan();

        let a = engine.project(&plan);
        let b = engine.project(&plan);

        assert_eq!(a.future_value.to_bits(), b.future_value.to_bits());
        assert_eq!(a.total_invested.to_bits(), b.total_invested.to_bits());
    }

    #[test]
    fn test_custom_inflation_offset() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            inflation_offset_pct: 3.0,
        });
        let plan = Plan::new(2000.0, 4, 12.0, true, Schedule::Monthly).unwrap();

        assert_eq!(engine.effective_annual_rate_pct(&plan), 9.0);
    }
}
