//! Calculation logic for the Performance Financial Engine.
//!
//! This module contains the stages of the financial pipeline: line item
//! subtotals, management cost, the commission group, cost of sales, the
//! income tax line, and total cost with profit and ratios. [`run_pipeline`]
//! runs them in order; [`calculate_financials`] returns only the figures.

mod commission_group;
mod cost_of_sales;
mod income_tax;
mod management_cost;
mod pipeline;
mod profit;
mod subtotals;

pub use commission_group::{CommissionGroupResult, calculate_commission_group};
pub use cost_of_sales::{CostOfSalesResult, calculate_cost_of_sales};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use management_cost::{ManagementCostResult, calculate_management_cost};
pub use pipeline::{
    FinancialsCalculation, PIPELINE_STEP_COUNT, WARN_COEFFICIENTS_EXCEED_REVENUE,
    WARN_DIRECTION_MISMATCH, WARN_ZERO_REVENUE, calculate_financials, run_pipeline,
};
pub use profit::{ProfitResult, calculate_profit, ratio};
pub use subtotals::{
    AMOUNT_OVERFLOW_MESSAGE, LineItemSubtotals, SubtotalsResult, calculate_line_item_subtotals,
    sum_by_type,
};
