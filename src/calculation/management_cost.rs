//! Management cost calculation.
//!
//! Management cost is the operating cost and customer care cost, each
//! charged as a fraction of revenue.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PerformanceCostCoefficients};

/// The result of the management cost step.
#[derive(Debug, Clone)]
pub struct ManagementCostResult {
    /// `revenue × operating_cost`.
    pub operating_cost_amount: Decimal,
    /// `revenue × customer_care_cost`.
    pub customer_care_cost_amount: Decimal,
    /// Operating plus customer care amounts.
    pub management_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the operating, customer care and total management cost.
///
/// Fails with [`EngineError::CalculationError`] if an amount overflows.
///
/// # Arguments
///
/// * `revenue` - Total revenue of the performance
/// * `coefficients` - The performance's cost coefficients
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use perf_engine::calculation::calculate_management_cost;
/// use perf_engine::models::PerformanceCostCoefficients;
/// use rust_decimal::Decimal;
///
/// let coefficients = PerformanceCostCoefficients {
///     operating_cost: Decimal::new(1, 1),
///     customer_care_cost: Decimal::new(5, 2),
///     ..PerformanceCostCoefficients::zero()
/// };
///
/// let result = calculate_management_cost(Decimal::new(1000, 0), &coefficients, 1).unwrap();
/// assert_eq!(result.operating_cost_amount, Decimal::new(100, 0));
/// assert_eq!(result.customer_care_cost_amount, Decimal::new(50, 0));
/// assert_eq!(result.management_cost, Decimal::new(150, 0));
/// ```
pub fn calculate_management_cost(
    revenue: Decimal,
    coefficients: &PerformanceCostCoefficients,
    step_number: u32,
) -> EngineResult<ManagementCostResult> {
    let operating_cost_amount = revenue
        .checked_mul(coefficients.operating_cost)
        .ok_or_else(|| EngineError::overflow("operating_cost_amount"))?;
    let customer_care_cost_amount = revenue
        .checked_mul(coefficients.customer_care_cost)
        .ok_or_else(|| EngineError::overflow("customer_care_cost_amount"))?;
    let management_cost = operating_cost_amount
        .checked_add(customer_care_cost_amount)
        .ok_or_else(|| EngineError::overflow("management_cost"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "management_cost".to_string(),
        rule_name: "Management Cost".to_string(),
        formula: "revenue x (operating_cost + customer_care_cost)".to_string(),
        input: serde_json::json!({
            "revenue": revenue.normalize().to_string(),
            "operating_cost": coefficients.operating_cost.normalize().to_string(),
            "customer_care_cost": coefficients.customer_care_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "operating_cost_amount": operating_cost_amount.normalize().to_string(),
            "customer_care_cost_amount": customer_care_cost_amount.normalize().to_string(),
            "management_cost": management_cost.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} + {} x {} = {}",
            revenue.normalize(),
            coefficients.operating_cost.normalize(),
            revenue.normalize(),
            coefficients.customer_care_cost.normalize(),
            management_cost.normalize()
        ),
    };

    Ok(ManagementCostResult {
        operating_cost_amount,
        customer_care_cost_amount,
        management_cost,
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

    #[test]
    fn test_operating_cost_only() {
        let coefficients = PerformanceCostCoefficients {
            operating_cost: dec("0.1"),
            ..PerformanceCostCoefficients::zero()
        };
        let result = calculate_management_cost(dec("1000"), &coefficients, 1).unwrap();

        assert_eq!(result.operating_cost_amount, dec("100"));
        assert_eq!(result.customer_care_cost_amount, Decimal::ZERO);
        assert_eq!(result.management_cost, dec("100"));
    }

    #[test]
    fn test_zero_revenue_gives_zero_cost() {
        let coefficients = PerformanceCostCoefficients {
            operating_cost: dec("0.3"),
            customer_care_cost: dec("0.2"),
            ..PerformanceCostCoefficients::zero()
        };
        let result = calculate_management_cost(Decimal::ZERO, &coefficients, 1).unwrap();
        assert_eq!(result.management_cost, Decimal::ZERO);
    }

    #[test]
    fn test_other_coefficients_are_ignored() {
        let coefficients = PerformanceCostCoefficients {
            commission_cost: dec("0.5"),
            reserve_cost: dec("0.5"),
            ..PerformanceCostCoefficients::zero()
        };
        let result = calculate_management_cost(dec("1000"), &coefficients, 1).unwrap();
        assert_eq!(result.management_cost, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_contents() {
        let coefficients = PerformanceCostCoefficients {
            operating_cost: dec("0.10"),
            customer_care_cost: dec("0.05"),
            ..PerformanceCostCoefficients::zero()
        };
        let result = calculate_management_cost(dec("2000"), &coefficients, 2).unwrap();

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "management_cost");
        assert_eq!(result.audit_step.input["operating_cost"].as_str().unwrap(), "0.1");
        assert_eq!(
            result.audit_step.output["management_cost"].as_str().unwrap(),
            "300"
        );
        assert!(result.audit_step.reasoning.contains("2000 x 0.1"));
        assert!(result.audit_step.reasoning.ends_with("= 300"));
    }

    #[test]
    fn test_full_rate_at_decimal_max() {
        let coefficients = PerformanceCostCoefficients {
            operating_cost: Decimal::ONE,
            ..PerformanceCostCoefficients::zero()
        };
        let result = calculate_management_cost(Decimal::MAX, &coefficients, 1).unwrap();
        assert_eq!(result.management_cost, Decimal::MAX);
    }

    #[test]
    fn test_overflow_is_a_calculation_error() {
        let coefficients = PerformanceCostCoefficients {
            operating_cost: Decimal::ONE,
            customer_care_cost: Decimal::ONE,
            ..PerformanceCostCoefficients::zero()
        };
        match calculate_management_cost(Decimal::MAX, &coefficients, 1) {
            Err(EngineError::CalculationError { message }) => {
                assert_eq!(message, "management_cost exceeds the decimal range");
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }

        let coefficients = PerformanceCostCoefficients {
            operating_cost: dec("2"),
            ..PerformanceCostCoefficients::zero()
        };
        assert!(calculate_management_cost(Decimal::MAX, &coefficients, 1).is_err());
    }
}
