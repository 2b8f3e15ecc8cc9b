//! Plan data structures matching the calculator input format

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contribution schedule for a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// Fixed deposit at the start of every month
    Monthly,
    /// Fixed deposit at the start of every quarter
    Quarterly,
    /// Single lump-sum deposit at inception, compounded annually
    OneTime,
}

impl Schedule {
    /// Number of compounding sub-periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Schedule::Monthly => 12,
            Schedule::Quarterly => 4,
            Schedule::OneTime => 1,
        }
    }

    /// Calendar months spanned by one sub-period
    pub fn months_per_period(&self) -> u32 {
        match self {
            Schedule::Monthly => 1,
            Schedule::Quarterly => 3,
            Schedule::OneTime => 12,
        }
    }

    /// Get the display label for reports and CSV headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Schedule::Monthly => "Monthly",
            Schedule::Quarterly => "Quarterly",
            Schedule::OneTime => "One-time",
        }
    }
}

/// Validation errors for plan inputs
///
/// These are the only recoverable errors in the system; the projection
/// engine itself is total over validated plans.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("contribution amount must be positive, got {0}")]
    NonPositiveContribution(f64),

    #[error("investment period must be at least one year")]
    ZeroYears,

    #[error("annual return rate must be finite, got {0}")]
    NonFiniteRate(f64),
}

/// A single investment plan
///
/// `contribution` is the amount deposited per compounding period (the
/// monthly deposit for Monthly, the quarterly deposit for Quarterly, and
/// the full lump sum for OneTime).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Deposit amount per compounding period
    pub contribution: f64,

    /// Investment horizon in whole years
    pub years: u32,

    /// Nominal expected annual return rate, in percent
    pub annual_rate_pct: f64,

    /// Whether to reduce the nominal rate by the inflation offset
    #[serde(default)]
    pub adjust_for_inflation: bool,

    /// Contribution schedule
    pub schedule: Schedule,
}

impl Plan {
    /// Create a validated plan
    pub fn new(
        contribution: f64,
        years: u32,
        annual_rate_pct: f64,
        adjust_for_inflation: bool,
        schedule: Schedule,
    ) -> Result<Self, PlanError> {
        let plan = Self {
            contribution,
            years,
            annual_rate_pct,
            adjust_for_inflation,
            schedule,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Validate boundary invariants before the plan reaches the engine
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.contribution > 0.0) {
            return Err(PlanError::NonPositiveContribution(self.contribution));
        }
        if self.years == 0 {
            return Err(PlanError::ZeroYears);
        }
        if !self.annual_rate_pct.is_finite() {
            return Err(PlanError::NonFiniteRate(self.annual_rate_pct));
        }
        Ok(())
    }

    /// Total number of compounding sub-periods over the horizon
    pub fn total_periods(&self) -> u32 {
        self.years * self.schedule.periods_per_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(Schedule::Monthly.periods_per_year(), 12);
        assert_eq!(Schedule::Quarterly.periods_per_year(), 4);
        assert_eq!(Schedule::OneTime.periods_per_year(), 1);
    }

    #[test]
    fn test_total_periods() {
        let plan = Plan::new(2000.0, 4, 12.0, false, Schedule::Monthly).unwrap();
        assert_eq!(plan.total_periods(), 48);

        let plan = Plan::new(6000.0, 4, 12.0, false, Schedule::Quarterly).unwrap();
        assert_eq!(plan.total_periods(), 16);

        let plan = Plan::new(24000.0, 4, 12.0, false, Schedule::OneTime).unwrap();
        assert_eq!(plan.total_periods(), 4);
    }

    #[test]
    fn test_rejects_non_positive_contribution() {
        let err = Plan::new(0.0, 4, 12.0, false, Schedule::Monthly).unwrap_err();
        assert_eq!(err, PlanError::NonPositiveContribution(0.0));

        let err = Plan::new(-500.0, 4, 12.0, false, Schedule::Monthly).unwrap_err();
        assert_eq!(err, PlanError::NonPositiveContribution(-500.0));
    }

    #[test]
    fn test_rejects_zero_years() {
        let err = Plan::new(2000.0, 0, 12.0, false, Schedule::Monthly).unwrap_err();
        assert_eq!(err, PlanError::ZeroYears);
    }

    #[test]
    fn test_rejects_non_finite_rate() {
        let err = Plan::new(2000.0, 4, f64::NAN, false, Schedule::Monthly).unwrap_err();
        assert!(matches!(err, PlanError::NonFiniteRate(_)));

        let err = Plan::new(2000.0, 4, f64::INFINITY, false, Schedule::Monthly).unwrap_err();
        assert!(matches!(err, PlanError::NonFiniteRate(_)));
    }

    #[test]
    fn test_nan_contribution_rejected() {
        // NaN fails the `> 0.0` comparison, so it lands in the same bucket
        let err = Plan::new(f64::NAN, 4, 12.0, false, Schedule::Monthly).unwrap_err();
        assert!(matches!(err, PlanError::NonPositiveContribution(_)));
    }

    #[test]
    fn test_plan_json_round_trip() {
        let plan = Plan::new(2000.0, 4, 12.0, true, Schedule::Quarterly).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.schedule, Schedule::Quarterly);
        assert_eq!(back.contribution, plan.contribution);
        assert!(back.adjust_for_inflation);
    }
}
