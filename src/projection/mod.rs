//! Projection engine and derived chart series

mod engine;
mod series;

pub use engine::{ProjectionEngine, ProjectionConfig, ProjectionResult, DEFAULT_INFLATION_OFFSET_PCT};
pub use series::{GrowthSeries, SeriesPoint, YearlyRow};
