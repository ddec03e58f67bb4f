//! Total cost, profit and ratio calculation.
//!
//! This is the last stage of the pipeline. Ratios are divided in `f64` with
//! no guard on the revenue: a zero revenue yields `NaN` or an infinity.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the profit step.
#[derive(Debug, Clone)]
pub struct ProfitResult {
    /// `management_cost + cost_of_sales + income_tax`.
    pub total_cost: Decimal,
    /// `revenue - total_cost`.
    pub profit: Decimal,
    /// `profit / revenue`.
    pub profit_ratio: f64,
    /// `cost_of_sales / revenue`.
    pub cost_of_sales_ratio: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Divides two decimals as `f64`.
///
/// Division by zero follows IEEE 754: `0 / 0` is `NaN`, `x / 0` is an
/// infinity with the sign of `x`.
///
/// # Examples
///
/// ```
/// use perf_engine::calculation::ratio;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ratio(Decimal::new(-100, 0), Decimal::new(1000, 0)), -0.1);
/// assert!(ratio(Decimal::ZERO, Decimal::ZERO).is_nan());
/// assert_eq!(ratio(Decimal::ONE, Decimal::ZERO), f64::INFINITY);
/// ```
pub fn ratio(numerator: Decimal, denominator: Decimal) -> f64 {
    let numerator = numerator.to_f64().unwrap_or(f64::NAN);
    let denominator = denominator.to_f64().unwrap_or(f64::NAN);
    numerator / denominator
}

/// Calculates total cost, profit and the profit and cost-of-sales ratios.
///
/// Cost of sales and income tax are added first; their sum is
/// `revenue - commission_amount` and stays in range. Fails with
/// [`EngineError::CalculationError`] if total cost or profit overflows.
///
/// # Arguments
///
/// * `revenue` - Total revenue of the performance
/// * `management_cost` - Operating plus customer care cost
/// * `cost_of_sales` - Commission group plus output-item cost
/// * `income_tax` - The income tax line
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_profit(
    revenue: Decimal,
    management_cost: Decimal,
    cost_of_sales: Decimal,
    income_tax: Decimal,
    step_number: u32,
) -> EngineResult<ProfitResult> {
    let total_cost = cost_of_sales
        .checked_add(income_tax)
        .and_then(|sum| sum.checked_add(management_cost))
        .ok_or_else(|| EngineError::overflow("total_cost"))?;
    let profit = revenue
        .checked_sub(total_cost)
        .ok_or_else(|| EngineError::overflow("profit"))?;
    let profit_ratio = ratio(profit, revenue);
    let cost_of_sales_ratio = ratio(cost_of_sales, revenue);

    let audit_step = AuditStep {
        step_number,
        rule_id: "profit".to_string(),
        rule_name: "Profit and Ratios".to_string(),
        formula: "profit = revenue - (management_cost + cost_of_sales + income_tax)".to_string(),
        input: serde_json::json!({
            "revenue": revenue.normalize().to_string(),
            "management_cost": management_cost.normalize().to_string(),
            "cost_of_sales": cost_of_sales.normalize().to_string(),
            "income_tax": income_tax.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_cost": total_cost.normalize().to_string(),
            "profit": profit.normalize().to_string(),
            "profit_ratio": profit_ratio.to_string(),
            "cost_of_sales_ratio": cost_of_sales_ratio.to_string()
        }),
        reasoning: format!(
            "{} - {} = {} ({} of revenue)",
            revenue.normalize(),
            total_cost.normalize(),
            profit.normalize(),
            profit_ratio
        ),
    };

    Ok(ProfitResult {
        total_cost,
        profit,
        profit_ratio,
        cost_of_sales_ratio,
        audit_step,
    })
}
