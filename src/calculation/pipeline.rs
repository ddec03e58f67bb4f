//! The performance financial pipeline.
//!
//! Runs the calculation stages in their fixed order and assembles a
//! [`DerivedFinancials`]. Every function here is pure: the same line items and
//! coefficients always produce bit-identical figures.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditWarning, DerivedFinancials, PerformanceCostCoefficients, RevenueDirection,
    RevenueLineItem,
};

use super::commission_group::calculate_commission_group;
use super::cost_of_sales::calculate_cost_of_sales;
use super::income_tax::calculate_income_tax;
use super::management_cost::calculate_management_cost;
use super::profit::calculate_profit;
use super::subtotals::calculate_line_item_subtotals;

/// Number of audit steps recorded by [`run_pipeline`].
pub const PIPELINE_STEP_COUNT: u32 = 6;

/// Warning code for a performance with zero revenue.
pub const WARN_ZERO_REVENUE: &str = "ZERO_REVENUE";

/// Warning code for an item whose direction disagrees with its list.
pub const WARN_DIRECTION_MISMATCH: &str = "DIRECTION_MISMATCH";

/// Warning code for coefficients that add up to more than 100%.
pub const WARN_COEFFICIENTS_EXCEED_REVENUE: &str = "COEFFICIENTS_EXCEED_REVENUE";

/// The figures of a pipeline run together with its audit trail.
#[derive(Debug, Clone)]
pub struct FinancialsCalculation {
    /// The derived figures.
    pub financials: DerivedFinancials,
    /// One audit step per pipeline stage, in execution order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings about suspicious input. They never alter a figure.
    pub warnings: Vec<AuditWarning>,
}

/// Derives all financial figures for a performance.
///
/// Fails only when a figure overflows `Decimal`: an item amount gives
/// [`EngineError::InvalidLineItem`](crate::error::EngineError::InvalidLineItem),
/// any other figure [`EngineError::CalculationError`](crate::error::EngineError::CalculationError).
///
/// # Arguments
///
/// * `input_items` - Revenue line items
/// * `output_items` - Cost line items
/// * `coefficients` - The six percentage-cost rates
///
/// # Examples
///
/// ```
/// use perf_engine::calculation::calculate_financials;
/// use perf_engine::models::{
///     PerformanceCostCoefficients, RevenueDirection, RevenueLineItem, RevenueType,
/// };
/// use rust_decimal::Decimal;
///
/// let coefficients = PerformanceCostCoefficients {
///     operating_cost: Decimal::new(1, 1),
///     ..PerformanceCostCoefficients::zero()
/// };
/// let input = vec![RevenueLineItem {
///     price: Decimal::new(1000, 0),
///     quantity: 1,
///     item_type: RevenueType::OneTime,
///     direction: RevenueDirection::In,
/// }];
///
/// let financials = calculate_financials(&input, &[], &coefficients).unwrap();
/// assert_eq!(financials.revenue, Decimal::new(1000, 0));
/// assert_eq!(financials.total_cost, Decimal::new(1100, 0));
/// assert_eq!(financials.profit, Decimal::new(-100, 0));
/// assert_eq!(financials.profit_ratio, -0.1);
/// ```
pub fn calculate_financials(
    input_items: &[RevenueLineItem],
    output_items: &[RevenueLineItem],
    coefficients: &PerformanceCostCoefficients,
) -> EngineResult<DerivedFinancials> {
    Ok(run_pipeline(input_items, output_items, coefficients, 1)?.financials)
}

/// Runs the pipeline and records an audit step for each stage.
///
/// Stages, in order: line item subtotals, management cost, commission group,
/// cost of sales, income tax, profit and ratios. The first stage to overflow
/// aborts the run with its error.
///
/// # Arguments
///
/// * `input_items` - Revenue line items
/// * `output_items` - Cost line items
/// * `coefficients` - The six percentage-cost rates
/// * `first_step` - Step number given to the first audit step
pub fn run_pipeline(
    input_items: &[RevenueLineItem],
    output_items: &[RevenueLineItem],
    coefficients: &PerformanceCostCoefficients,
    first_step: u32,
) -> EngineResult<FinancialsCalculation> {
    let mut step_number = first_step;
    let mut audit_steps = Vec::with_capacity(PIPELINE_STEP_COUNT as usize);

    let subtotals_result = calculate_line_item_subtotals(input_items, output_items, step_number)?;
    let subtotals = subtotals_result.subtotals;
    audit_steps.push(subtotals_result.audit_step);
    step_number += 1;

    let revenue = subtotals.revenue;

    let management = calculate_management_cost(revenue, coefficients, step_number)?;
    audit_steps.push(management.audit_step);
    step_number += 1;

    let commission = calculate_commission_group(revenue, coefficients, step_number)?;
    audit_steps.push(commission.audit_step);
    step_number += 1;

    let cost_of_sales_result = calculate_cost_of_sales(
        commission.commission_group_total,
        subtotals.cost_total,
        step_number,
    )?;
    let cost_of_sales = cost_of_sales_result.cost_of_sales;
    audit_steps.push(cost_of_sales_result.audit_step);
    step_number += 1;

    let income_tax_result = calculate_income_tax(
        revenue,
        cost_of_sales,
        commission.commission_amount,
        step_number,
    )?;
    let income_tax = income_tax_result.income_tax;
    audit_steps.push(income_tax_result.audit_step);
    step_number += 1;

    let profit_result = calculate_profit(
        revenue,
        management.management_cost,
        cost_of_sales,
        income_tax,
        step_number,
    )?;
    audit_steps.push(profit_result.audit_step);

    let financials = DerivedFinancials {
        revenue_one_time: subtotals.revenue_one_time,
        revenue_monthly: subtotals.revenue_monthly,
        revenue,
        cost_one_time: subtotals.cost_one_time,
        cost_monthly: subtotals.cost_monthly,
        cost_total: subtotals.cost_total,
        operating_cost_amount: management.operating_cost_amount,
        customer_care_cost_amount: management.customer_care_cost_amount,
        management_cost: management.management_cost,
        commission_amount: commission.commission_amount,
        diplomatic_amount: commission.diplomatic_amount,
        customer_amount: commission.customer_amount,
        reserve_amount: commission.reserve_amount,
        commission_group_total: commission.commission_group_total,
        cost_of_sales,
        income_tax,
        total_cost: profit_result.total_cost,
        profit: profit_result.profit,
        profit_ratio: profit_result.profit_ratio,
        cost_of_sales_ratio: profit_result.cost_of_sales_ratio,
    };

    let warnings = collect_warnings(input_items, output_items, coefficients, revenue);

    Ok(FinancialsCalculation {
        financials,
        audit_steps,
        warnings,
    })
}

fn collect_warnings(
    input_items: &[RevenueLineItem],
    output_items: &[RevenueLineItem],
    coefficients: &PerformanceCostCoefficients,
    revenue: Decimal,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if revenue.is_zero() {
        warnings.push(AuditWarning::new(
            WARN_ZERO_REVENUE,
            "Revenue is zero; profit and cost-of-sales ratios are undefined",
            "medium",
        ));
    }

    let lists = [
        ("revenue_input", input_items, RevenueDirection::In),
        ("revenue_output", output_items, RevenueDirection::Out),
    ];
    for (list, items, expected) in lists {
        for (index, item) in items.iter().enumerate() {
            if item.direction != expected {
                warnings.push(AuditWarning::new(
                    WARN_DIRECTION_MISMATCH,
                    format!(
                        "{}[{}] has direction {:?} but was counted as {:?}",
                        list, index, item.direction, expected
                    ),
                    "low",
                ));
            }
        }
    }

    match coefficients.total() {
        Some(total_rate) if total_rate <= Decimal::ONE => {}
        Some(total_rate) => warnings.push(AuditWarning::new(
            WARN_COEFFICIENTS_EXCEED_REVENUE,
            format!(
                "Cost coefficients add up to {} of revenue",
                total_rate.normalize()
            ),
            "high",
        )),
        None => warnings.push(AuditWarning::new(
            WARN_COEFFICIENTS_EXCEED_REVENUE,
            "Cost coefficients add up to more than the decimal range",
            "high",
        )),
    }

    warnings
}
