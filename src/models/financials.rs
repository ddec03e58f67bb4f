//! Derived financial figures for a performance.
//!
//! [`DerivedFinancials`] is the output of the calculation pipeline. It has no
//! identity beyond a single calculation and is rebuilt on every call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All figures derived from a performance's line items and coefficients.
///
/// Monetary amounts are exact decimals. The two ratios are `f64` because a
/// zero revenue makes them `NaN` (0/0) or infinite (x/0), and that result is
/// reported as-is rather than clamped.
///
/// Ratios serialize as JSON numbers, or `null` when not finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedFinancials {
    /// Revenue from one-time input items.
    pub revenue_one_time: Decimal,
    /// Revenue from monthly input items.
    pub revenue_monthly: Decimal,
    /// Total revenue (one-time + monthly).
    pub revenue: Decimal,
    /// Cost from one-time output items.
    pub cost_one_time: Decimal,
    /// Cost from monthly output items.
    pub cost_monthly: Decimal,
    /// Total cost of output items.
    ///
    /// Displayed as "input cost" (chi phí đầu vào) even though it is built
    /// from the output-direction items.
    pub cost_total: Decimal,
    /// `revenue × operating_cost`.
    pub operating_cost_amount: Decimal,
    /// `revenue × customer_care_cost`.
    pub customer_care_cost_amount: Decimal,
    /// Operating plus customer care amounts.
    pub management_cost: Decimal,
    /// `revenue × commission_cost`.
    pub commission_amount: Decimal,
    /// `revenue × diplomatic_cost`.
    pub diplomatic_amount: Decimal,
    /// `revenue × customer_cost`.
    pub customer_amount: Decimal,
    /// `revenue × reserve_cost`.
    pub reserve_amount: Decimal,
    /// Commission, diplomatic, customer and reserve amounts summed.
    pub commission_group_total: Decimal,
    /// `commission_group_total + cost_total`.
    pub cost_of_sales: Decimal,
    /// `revenue - cost_of_sales - commission_amount`.
    pub income_tax: Decimal,
    /// `management_cost + cost_of_sales + income_tax`.
    pub total_cost: Decimal,
    /// `revenue - total_cost`.
    pub profit: Decimal,
    /// `profit / revenue` as a fraction.
    #[serde(with = "ratio")]
    pub profit_ratio: f64,
    /// `cost_of_sales / revenue` as a fraction.
    #[serde(with = "ratio")]
    pub cost_of_sales_ratio: f64,
}

impl DerivedFinancials {
    /// Returns true if both ratios are finite numbers.
    pub fn has_defined_ratios(&self) -> bool {
        self.profit_ratio.is_finite() && self.cost_of_sales_ratio.is_finite()
    }
}

mod ratio {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeroed(profit_ratio: f64, cost_of_sales_ratio: f64) -> DerivedFinancials {
        DerivedFinancials {
            revenue_one_time: Decimal::ZERO,
            revenue_monthly: Decimal::ZERO,
            revenue: Decimal::ZERO,
            cost_one_time: Decimal::ZERO,
            cost_monthly: Decimal::ZERO,
            cost_total: Decimal::ZERO,
            operating_cost_amount: Decimal::ZERO,
            customer_care_cost_amount: Decimal::ZERO,
            management_cost: Decimal::ZERO,
            commission_amount: Decimal::ZERO,
            diplomatic_amount: Decimal::ZERO,
            customer_amount: Decimal::ZERO,
            reserve_amount: Decimal::ZERO,
            commission_group_total: Decimal::ZERO,
            cost_of_sales: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            profit: Decimal::ZERO,
            profit_ratio,
            cost_of_sales_ratio,
        }
    }

    #[test]
    fn test_nan_ratio_serializes_as_null() {
        let json = serde_json::to_value(zeroed(f64::NAN, f64::INFINITY)).unwrap();
        assert!(json["profit_ratio"].is_null());
        assert!(json["cost_of_sales_ratio"].is_null());
        assert_eq!(json["revenue"], "0");
    }

    #[test]
    fn test_finite_ratio_serializes_as_number() {
        let json = serde_json::to_value(zeroed(-0.1, 0.25)).unwrap();
        assert_eq!(json["profit_ratio"].as_f64().unwrap(), -0.1);
        assert_eq!(json["cost_of_sales_ratio"].as_f64().unwrap(), 0.25);
    }

    #[test]
    fn test_null_ratio_deserializes_as_nan() {
        let json = serde_json::to_string(&zeroed(f64::NAN, 0.5)).unwrap();
        let back: DerivedFinancials = serde_json::from_str(&json).unwrap();
        assert!(back.profit_ratio.is_nan());
        assert_eq!(back.cost_of_sales_ratio, 0.5);
    }

    #[test]
    fn test_has_defined_ratios() {
        assert!(zeroed(0.1, 0.2).has_defined_ratios());
        assert!(!zeroed(f64::NAN, 0.2).has_defined_ratios());
        assert!(!zeroed(0.1, f64::NEG_INFINITY).has_defined_ratios());
    }
}
