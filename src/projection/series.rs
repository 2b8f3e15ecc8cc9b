//! Chart series output structures for projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::plan::Schedule;

/// A single point of the growth curve, one per elapsed sub-period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// 1-based sub-period index (month, quarter, or year)
    pub period_index: u32,

    /// Calendar date of the end of the sub-period
    pub date: NaiveDate,

    /// Amount contributed up to and including this sub-period
    pub cumulative_invested: f64,

    /// Projected value at the end of this sub-period
    pub projected_value: f64,
}

/// One row of the year-indexed bar-chart breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    /// 1-based completed year
    pub year: u32,

    pub cumulative_invested: f64,
    pub projected_value: f64,
}

/// Complete growth curve for one plan
///
/// Recomputed deterministically from the plan on every request; there is no
/// incremental state to resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSeries {
    /// Schedule the series was generated for
    pub schedule: Schedule,

    /// Ordered points, one per sub-period
    pub points: Vec<SeriesPoint>,
}

impl GrowthSeries {
    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Down-sample to one row per completed year
    ///
    /// Takes every 12th month, every 4th quarter, or each point as-is for
    /// one-time plans.
    pub fn yearly_breakdown(&self) -> Vec<YearlyRow> {
        let ppy = self.schedule.periods_per_year();
        self.points
            .iter()
            .filter(|p| p.period_index % ppy == 0)
            .map(|p| YearlyRow {
                year: p.period_index / ppy,
                cumulative_invested: p.cumulative_invested,
                projected_value: p.projected_value,
            })
            .collect()
    }
}
