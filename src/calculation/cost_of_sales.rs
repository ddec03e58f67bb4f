//! Cost of sales calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the cost of sales step.
#[derive(Debug, Clone)]
pub struct CostOfSalesResult {
    /// `commission_group_total + cost_total`.
    pub cost_of_sales: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates cost of sales as the commission group plus the output-item cost.
///
/// `cost_total` is the sum of the output-direction line items, the figure
/// shown as "input cost" in the performance view.
pub fn calculate_cost_of_sales(
    commission_group_total: Decimal,
    cost_total: Decimal,
    step_number: u32,
) -> EngineResult<CostOfSalesResult> {
    let cost_of_sales = commission_group_total
        .checked_add(cost_total)
        .ok_or_else(|| EngineError::overflow("cost_of_sales"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "cost_of_sales".to_string(),
        rule_name: "Cost of Sales".to_string(),
        formula: "commission_group_total + cost_total".to_string(),
        input: serde_json::json!({
            "commission_group_total": commission_group_total.normalize().to_string(),
            "cost_total": cost_total.normalize().to_string()
        }),
        output: serde_json::json!({
            "cost_of_sales": cost_of_sales.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} = {}",
            commission_group_total.normalize(),
            cost_total.normalize(),
            cost_of_sales.normalize()
        ),
    };

    Ok(CostOfSalesResult {
        cost_of_sales,
        audit_step,
    })
}
