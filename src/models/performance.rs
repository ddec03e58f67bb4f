//! Performance snapshot model.
//!
//! A performance is a single sales deal: the revenue it brings in, the costs
//! paid out to deliver it, and the cost coefficients agreed for it.

use serde::{Deserialize, Serialize};

use crate::calculation::calculate_financials;
use crate::error::EngineResult;

use super::{DerivedFinancials, PerformanceCostCoefficients, RevenueDirection, RevenueLineItem};

/// A snapshot of a performance as fetched from the backend.
///
/// # Example
///
/// ```
/// use perf_engine::models::{
///     Performance, PerformanceCostCoefficients, RevenueDirection, RevenueLineItem, RevenueType,
/// };
/// use rust_decimal::Decimal;
///
/// let performance = Performance {
///     id: "perf_001".to_string(),
///     coefficients: PerformanceCostCoefficients::zero(),
///     revenue_input: vec![RevenueLineItem {
///         price: Decimal::new(1000, 0),
///         quantity: 1,
///         item_type: RevenueType::OneTime,
///         direction: RevenueDirection::In,
///     }],
///     revenue_output: vec![],
/// };
///
/// assert_eq!(performance.financials().unwrap().revenue, Decimal::new(1000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Backend identifier of the performance.
    pub id: String,
    /// The cost coefficients agreed for the performance.
    pub coefficients: PerformanceCostCoefficients,
    /// Revenue (input-direction) line items.
    #[serde(default)]
    pub revenue_input: Vec<RevenueLineItem>,
    /// Cost (output-direction) line items.
    #[serde(default)]
    pub revenue_output: Vec<RevenueLineItem>,
}

impl Performance {
    /// Builds a performance from a single mixed list, splitting items by direction.
    pub fn from_mixed_items(
        id: impl Into<String>,
        coefficients: PerformanceCostCoefficients,
        items: Vec<RevenueLineItem>,
    ) -> Self {
        let (revenue_input, revenue_output) = items
            .into_iter()
            .partition(|item| item.direction == RevenueDirection::In);

        Self {
            id: id.into(),
            coefficients,
            revenue_input,
            revenue_output,
        }
    }

    /// Runs the financial calculation over this snapshot.
    pub fn financials(&self) -> EngineResult<DerivedFinancials> {
        calculate_financials(&self.revenue_input, &self.revenue_output, &self.coefficients)
    }
}
