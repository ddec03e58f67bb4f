//! Core data models for the Performance Financial Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod coefficients;
mod financials;
mod line_item;
mod performance;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use coefficients::PerformanceCostCoefficients;
pub use financials::DerivedFinancials;
pub use line_item::{RevenueDirection, RevenueLineItem, RevenueType};
pub use performance::Performance;
