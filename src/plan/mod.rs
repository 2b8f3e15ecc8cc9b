//! Plan definitions for SIP projections

mod data;

pub use data::{Plan, PlanError, Schedule};
