//! Income tax line calculation.
//!
//! The income tax line is whatever revenue remains after cost of sales, with
//! the commission amount taken off a second time. Commission is therefore
//! counted once inside cost of sales and once here.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the income tax step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// `revenue - cost_of_sales - commission_amount`.
    pub income_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the income tax line.
///
/// Fails with [`EngineError::CalculationError`] if the difference overflows.
///
/// # Examples
///
/// ```
/// use perf_engine::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
///
/// let result = calculate_income_tax(
///     Decimal::new(1000, 0),
///     Decimal::new(300, 0),
///     Decimal::new(100, 0),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.income_tax, Decimal::new(600, 0));
/// ```
pub fn calculate_income_tax(
    revenue: Decimal,
    cost_of_sales: Decimal,
    commission_amount: Decimal,
    step_number: u32,
) -> EngineResult<IncomeTaxResult> {
    let income_tax = revenue
        .checked_sub(cost_of_sales)
        .and_then(|remainder| remainder.checked_sub(commission_amount))
        .ok_or_else(|| EngineError::overflow("income_tax"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        formula: "revenue - cost_of_sales - commission_amount".to_string(),
        input: serde_json::json!({
            "revenue": revenue.normalize().to_string(),
            "cost_of_sales": cost_of_sales.normalize().to_string(),
            "commission_amount": commission_amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "income_tax": income_tax.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} - {} = {}",
            revenue.normalize(),
            cost_of_sales.normalize(),
            commission_amount.normalize(),
            income_tax.normalize()
        ),
    };

    Ok(IncomeTaxResult {
        income_tax,
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
    fn test_no_costs_leaves_full_revenue() {
        let result = calculate_income_tax(dec("1000"), Decimal::ZERO, Decimal::ZERO, 1).unwrap();
        assert_eq!(result.income_tax, dec("1000"));
    }

    #[test]
    fn test_commission_is_subtracted_again() {
        // cost_of_sales already includes the 100 commission
        let result = calculate_income_tax(dec("1000"), dec("400"), dec("100"), 1).unwrap();
        assert_eq!(result.income_tax, dec("500"));
    }

    #[test]
    fn test_can_go_negative() {
        let result = calculate_income_tax(dec("100"), dec("150"), dec("10"), 1).unwrap();
        assert_eq!(result.income_tax, dec("-60"));
    }

    #[test]
    fn test_audit_step_contents() {
        let result = calculate_income_tax(dec("1000"), dec("400"), dec("100"), 6).unwrap();
        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "income_tax");
        assert_eq!(result.audit_step.reasoning, "1000 - 400 - 100 = 500");
    }

    #[test]
    fn test_negative_overflow_is_a_calculation_error() {
        let result = calculate_income_tax(Decimal::ZERO, Decimal::MAX, Decimal::ZERO, 1).unwrap();
        assert_eq!(result.income_tax, Decimal::MIN);

        match calculate_income_tax(Decimal::ZERO, Decimal::MAX, Decimal::ONE, 1) {
            Err(EngineError::CalculationError { message }) => {
                assert_eq!(message, "income_tax exceeds the decimal range");
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
