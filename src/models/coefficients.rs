//! Cost coefficient model.
//!
//! Each performance carries six fractional rates that are applied to its
//! revenue to produce the percentage-based cost tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six percentage-cost coefficients of a performance.
///
/// Rates are fractions (0.1 means 10%). They are nominally within 0.0–1.0 but
/// the calculation does not enforce it.
///
/// # Example
///
/// ```
/// use perf_engine::models::PerformanceCostCoefficients;
/// use rust_decimal::Decimal;
///
/// let coefficients = PerformanceCostCoefficients {
///     operating_cost: Decimal::new(1, 1),
///     ..PerformanceCostCoefficients::zero()
/// };
/// assert_eq!(coefficients.total(), Some(Decimal::new(1, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerformanceCostCoefficients {
    /// Operating cost rate.
    pub operating_cost: Decimal,
    /// Customer care cost rate.
    pub customer_care_cost: Decimal,
    /// Sales commission rate.
    pub commission_cost: Decimal,
    /// Diplomatic (relationship) cost rate.
    pub diplomatic_cost: Decimal,
    /// Reserve fund rate.
    pub reserve_cost: Decimal,
    /// Customer rebate rate.
    pub customer_cost: Decimal,
}

impl PerformanceCostCoefficients {
    /// Returns a coefficient set with every rate at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns `(field name, rate)` pairs in declaration order.
    pub fn fields(&self) -> [(&'static str, Decimal); 6] {
        [
            ("operating_cost", self.operating_cost),
            ("customer_care_cost", self.customer_care_cost),
            ("commission_cost", self.commission_cost),
            ("diplomatic_cost", self.diplomatic_cost),
            ("reserve_cost", self.reserve_cost),
            ("customer_cost", self.customer_cost),
        ]
    }

    /// Returns the sum of all six rates, or `None` if it overflows `Decimal`.
    pub fn total(&self) -> Option<Decimal> {
        self.fields()
            .iter()
            .try_fold(Decimal::ZERO, |total, (_, rate)| total.checked_add(*rate))
    }
}
