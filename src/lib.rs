//! SIP Calculator - Projection engine for systematic investment plans
//!
//! This library provides:
//! - Future-value projections for monthly, quarterly, and one-time plans
//! - Optional inflation adjustment of the nominal return rate
//! - Per-period growth series and yearly roll-ups for charting
//! - Side-by-side comparison of independent plans

pub mod plan;
pub mod projection;
pub mod comparison;

// Re-export commonly used types
pub use plan::{Plan, PlanError, Schedule};
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionResult, GrowthSeries};
pub use comparison::ComparisonRunner;
