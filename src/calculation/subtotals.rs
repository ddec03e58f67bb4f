//! Line item subtotal calculation.
//!
//! This module partitions a performance's input and output line items by
//! billing basis and sums `price × quantity` for each subset.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, RevenueLineItem, RevenueType};

/// Message for a line item whose `price × quantity` overflows `Decimal`.
pub const AMOUNT_OVERFLOW_MESSAGE: &str = "price x quantity exceeds the decimal range";

/// Subtotals of the input (revenue) and output (cost) line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItemSubtotals {
    /// Sum of one-time input items.
    pub revenue_one_time: Decimal,
    /// Sum of monthly input items.
    pub revenue_monthly: Decimal,
    /// `revenue_one_time + revenue_monthly`.
    pub revenue: Decimal,
    /// Sum of one-time output items.
    pub cost_one_time: Decimal,
    /// Sum of monthly output items.
    pub cost_monthly: Decimal,
    /// `cost_one_time + cost_monthly`.
    pub cost_total: Decimal,
}

/// The result of the subtotal step, including the audit step.
#[derive(Debug, Clone)]
pub struct SubtotalsResult {
    /// The computed subtotals.
    pub subtotals: LineItemSubtotals,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums `price × quantity` over the items of the given type.
///
/// Returns `None` if an amount or the running sum overflows `Decimal`.
///
/// # Examples
///
/// ```
/// use perf_engine::calculation::sum_by_type;
/// use perf_engine::models::{RevenueDirection, RevenueLineItem, RevenueType};
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     RevenueLineItem {
///         price: Decimal::new(100, 0),
///         quantity: 2,
///         item_type: RevenueType::OneTime,
///         direction: RevenueDirection::In,
///     },
///     RevenueLineItem {
///         price: Decimal::new(50, 0),
///         quantity: 4,
///         item_type: RevenueType::EveryMonth,
///         direction: RevenueDirection::In,
///     },
/// ];
///
/// assert_eq!(sum_by_type(&items, RevenueType::OneTime), Some(Decimal::new(200, 0)));
/// assert_eq!(sum_by_type(&items, RevenueType::EveryMonth), Some(Decimal::new(200, 0)));
/// ```
pub fn sum_by_type(items: &[RevenueLineItem], item_type: RevenueType) -> Option<Decimal> {
    items
        .iter()
        .filter(|item| item.item_type == item_type)
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.amount()?))
}

/// Fails on the first item of `list` whose amount overflows.
fn check_amounts(items: &[RevenueLineItem], list: &str) -> EngineResult<()> {
    match items.iter().position(|item| item.amount().is_none()) {
        Some(index) => Err(EngineError::InvalidLineItem {
            list: list.to_string(),
            index,
            field: "price".to_string(),
            message: AMOUNT_OVERFLOW_MESSAGE.to_string(),
        }),
        None => Ok(()),
    }
}

fn subtotal(items: &[RevenueLineItem], figure: &str, item_type: RevenueType) -> EngineResult<Decimal> {
    sum_by_type(items, item_type).ok_or_else(|| EngineError::overflow(figure))
}

/// Calculates revenue and cost subtotals from the line items.
///
/// Input items are partitioned into one-time and monthly subsets and summed
/// into revenue. Output items are partitioned the same way and summed into
/// the cost total. Which list an item arrives in decides its role; the
/// item's own `direction` field is not consulted.
///
/// Fails with [`EngineError::InvalidLineItem`] when an item's amount
/// overflows, and with [`EngineError::CalculationError`] when a subtotal does.
///
/// # Arguments
///
/// * `input_items` - The performance's revenue line items
/// * `output_items` - The performance's cost line items
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_line_item_subtotals(
    input_items: &[RevenueLineItem],
    output_items: &[RevenueLineItem],
    step_number: u32,
) -> EngineResult<SubtotalsResult> {
    check_amounts(input_items, "revenue_input")?;
    check_amounts(output_items, "revenue_output")?;

    let revenue_one_time = subtotal(input_items, "revenue_one_time", RevenueType::OneTime)?;
    let revenue_monthly = subtotal(input_items, "revenue_monthly", RevenueType::EveryMonth)?;
    let revenue = revenue_one_time
        .checked_add(revenue_monthly)
        .ok_or_else(|| EngineError::overflow("revenue"))?;

    let cost_one_time = subtotal(output_items, "cost_one_time", RevenueType::OneTime)?;
    let cost_monthly = subtotal(output_items, "cost_monthly", RevenueType::EveryMonth)?;
    let cost_total = cost_one_time
        .checked_add(cost_monthly)
        .ok_or_else(|| EngineError::overflow("cost_total"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "line_item_subtotals".to_string(),
        rule_name: "Line Item Subtotals".to_string(),
        formula: "sum(price x quantity) per type".to_string(),
        input: serde_json::json!({
            "input_items": input_items.len(),
            "output_items": output_items.len()
        }),
        output: serde_json::json!({
            "revenue_one_time": revenue_one_time.normalize().to_string(),
            "revenue_monthly": revenue_monthly.normalize().to_string(),
            "revenue": revenue.normalize().to_string(),
            "cost_one_time": cost_one_time.normalize().to_string(),
            "cost_monthly": cost_monthly.normalize().to_string(),
            "cost_total": cost_total.normalize().to_string()
        }),
        reasoning: format!(
            "Revenue {} + {} = {}; cost {} + {} = {}",
            revenue_one_time.normalize(),
            revenue_monthly.normalize(),
            revenue.normalize(),
            cost_one_time.normalize(),
            cost_monthly.normalize(),
            cost_total.normalize()
        ),
    };

    Ok(SubtotalsResult {
        subtotals: LineItemSubtotals {
            revenue_one_time,
            revenue_monthly,
            revenue,
            cost_one_time,
            cost_monthly,
            cost_total,
        },
        audit_step,
    })
}
