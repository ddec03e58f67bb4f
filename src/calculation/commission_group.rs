//! Commission group calculation.
//!
//! The commission group bundles four revenue-proportional charges:
//! commission, diplomatic cost, customer rebate and reserve.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PerformanceCostCoefficients};

/// The result of the commission group step.
#[derive(Debug, Clone)]
pub struct CommissionGroupResult {
    /// `revenue × commission_cost`.
    pub commission_amount: Decimal,
    /// `revenue × diplomatic_cost`.
    pub diplomatic_amount: Decimal,
    /// `revenue × customer_cost`.
    pub customer_amount: Decimal,
    /// `revenue × reserve_cost`.
    pub reserve_amount: Decimal,
    /// Sum of the four amounts.
    pub commission_group_total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the four commission-group amounts and their total.
///
/// Fails with [`EngineError::CalculationError`] if an amount overflows.
///
/// # Arguments
///
/// * `revenue` - Total revenue of the performance
/// * `coefficients` - The performance's cost coefficients
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_commission_group(
    revenue: Decimal,
    coefficients: &PerformanceCostCoefficients,
    step_number: u32,
) -> EngineResult<CommissionGroupResult> {
    let charge = |rate: Decimal, figure: &str| {
        revenue
            .checked_mul(rate)
            .ok_or_else(|| EngineError::overflow(figure))
    };
    let commission_amount = charge(coefficients.commission_cost, "commission_amount")?;
    let diplomatic_amount = charge(coefficients.diplomatic_cost, "diplomatic_amount")?;
    let customer_amount = charge(coefficients.customer_cost, "customer_amount")?;
    let reserve_amount = charge(coefficients.reserve_cost, "reserve_amount")?;
    let commission_group_total = [diplomatic_amount, customer_amount, reserve_amount]
        .into_iter()
        .try_fold(commission_amount, Decimal::checked_add)
        .ok_or_else(|| EngineError::overflow("commission_group_total"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "commission_group".to_string(),
        rule_name: "Commission Group".to_string(),
        formula: "revenue x (commission_cost + diplomatic_cost + customer_cost + reserve_cost)"
            .to_string(),
        input: serde_json::json!({
            "revenue": revenue.normalize().to_string(),
            "commission_cost": coefficients.commission_cost.normalize().to_string(),
            "diplomatic_cost": coefficients.diplomatic_cost.normalize().to_string(),
            "customer_cost": coefficients.customer_cost.normalize().to_string(),
            "reserve_cost": coefficients.reserve_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "commission_amount": commission_amount.normalize().to_string(),
            "diplomatic_amount": diplomatic_amount.normalize().to_string(),
            "customer_amount": customer_amount.normalize().to_string(),
            "reserve_amount": reserve_amount.normalize().to_string(),
            "commission_group_total": commission_group_total.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            commission_amount.normalize(),
            diplomatic_amount.normalize(),
            customer_amount.normalize(),
            reserve_amount.normalize(),
            commission_group_total.normalize()
        ),
    };

    Ok(CommissionGroupResult {
        commission_amount,
        diplomatic_amount,
        customer_amount,
        reserve_amount,
        commission_group_total,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn coefficients() -> PerformanceCostCoefficients {
        PerformanceCostCoefficients {
            operating_cost: dec("0.9"),
            customer_care_cost: dec("0.9"),
            commission_cost: dec("0.10"),
            diplomatic_cost: dec("0.02"),
            reserve_cost: dec("0.03"),
            customer_cost: dec("0.05"),
        }
    }

    #[test]
    fn test_each_amount_is_revenue_times_rate() {
        let result = calculate_commission_group(dec("10000"), &coefficients(), 1).unwrap();

        assert_eq!(result.commission_amount, dec("1000"));
        assert_eq!(result.diplomatic_amount, dec("200"));
        assert_eq!(result.reserve_amount, dec("300"));
        assert_eq!(result.customer_amount, dec("500"));
    }

    #[test]
    fn test_total_is_sum_of_four() {
        let result = calculate_commission_group(dec("10000"), &coefficients(), 1).unwrap();
        assert_eq!(result.commission_group_total, dec("2000"));
    }

    #[test]
    fn test_management_coefficients_do_not_contribute() {
        let coefficients = PerformanceCostCoefficients {
            operating_cost: dec("0.5"),
            customer_care_cost: dec("0.5"),
            ..PerformanceCostCoefficients::zero()
        };
        let result = calculate_commission_group(dec("10000"), &coefficients, 1).unwrap();
        assert_eq!(result.commission_group_total, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_contents() {
        let result = calculate_commission_group(dec("10000"), &coefficients(), 4).unwrap();

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "commission_group");
        assert_eq!(
            result.audit_step.output["commission_group_total"]
                .as_str()
                .unwrap(),
            "2000"
        );
        assert_eq!(result.audit_step.reasoning, "1000 + 200 + 500 + 300 = 2000");
    }

    #[test]
    fn test_total_overflow_is_a_calculation_error() {
        let coefficients = PerformanceCostCoefficients {
            commission_cost: dec("0.6"),
            reserve_cost: dec("0.6"),
            ..PerformanceCostCoefficients::zero()
        };
        match calculate_commission_group(Decimal::MAX, &coefficients, 1) {
            Err(EngineError::CalculationError { message }) => {
                assert_eq!(message, "commission_group_total exceeds the decimal range");
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_rates_at_decimal_max() {
        let result = calculate_commission_group(Decimal::MAX, &coefficients(), 1).unwrap();
        assert!(result.commission_group_total < Decimal::MAX);
        assert!(result.commission_amount > result.reserve_amount);
    }
}
