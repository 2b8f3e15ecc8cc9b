//! Comparison runner for side-by-side plan projections
//!
//! Builds one engine, then applies it independently to each plan. Plans do
//! not interact; batch output position i is exactly the single-plan result
//! for plan i.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::plan::Plan;
use crate::projection::{GrowthSeries, ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Upper bound on plans accepted for one side-by-side comparison request,
/// enforced at the API boundary
pub const MAX_COMPARISON_PLANS: usize = 8;

/// Pre-configured runner for comparing multiple plans
///
/// # Example
/// ```
/// use sip_calculator::{ComparisonRunner, Plan, Schedule};
///
/// let runner = ComparisonRunner::new();
/// let plans = vec![
///     Plan::new(2000.0, 4, 12.0, false, Schedule::Monthly).unwrap(),
///     Plan::new(6000.0, 4, 12.0, false, Schedule::Quarterly).unwrap(),
/// ];
/// let results = runner.run_batch(&plans);
/// assert_eq!(results.len(), 2);
/// ```
pub struct ComparisonRunner {
    engine: ProjectionEngine,
}

impl ComparisonRunner {
    /// Create a runner with the default engine config
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::with_defaults(),
        }
    }

    /// Create a runner with a specific engine config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single plan
    pub fn run(&self, plan: &Plan) -> ProjectionResult {
        self.engine.project(plan)
    }

    /// Run projections for multiple plans, preserving input order
    pub fn run_batch(&self, plans: &[Plan]) -> Vec<ProjectionResult> {
        log::debug!("running comparison batch of {} plans", plans.len());
        plans.par_iter().map(|plan| self.engine.project(plan)).collect()
    }

    /// Build growth series for multiple plans, preserving input order
    pub fn run_series_batch(&self, plans: &[Plan], start: NaiveDate) -> Vec<GrowthSeries> {
        plans
            .par_iter()
            .map(|plan| self.engine.growth_series(plan, start))
            .collect()
    }

    /// Get a reference to the underlying engine
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

impl Default for ComparisonRunner {
    fn default() -> Self {
        Self::new()
    }
}
