//! Display formatting for derived financial figures.
//!
//! Currency amounts are rounded and grouped per [`DisplayConfig`]. Ratios are
//! rendered as percentages: the profit ratio is shown unrounded, the
//! cost-of-sales ratio is rounded to a fixed number of places. Undefined
//! ratios render as `NaN%` or `Infinity%`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::{DisplayConfig, SymbolPosition};
use crate::models::DerivedFinancials;

/// Display strings for every figure in a [`DerivedFinancials`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialsDisplay {
    /// Revenue from one-time items.
    pub revenue_one_time: String,
    /// Revenue from monthly items.
    pub revenue_monthly: String,
    /// Total revenue.
    pub revenue: String,
    /// Cost of one-time output items.
    pub cost_one_time: String,
    /// Cost of monthly output items.
    pub cost_monthly: String,
    /// Total output-item cost, labelled "input cost" in the performance view.
    pub cost_total: String,
    /// Operating cost amount.
    pub operating_cost_amount: String,
    /// Customer care cost amount.
    pub customer_care_cost_amount: String,
    /// Management cost.
    pub management_cost: String,
    /// Commission amount.
    pub commission_amount: String,
    /// Diplomatic amount.
    pub diplomatic_amount: String,
    /// Customer amount.
    pub customer_amount: String,
    /// Reserve amount.
    pub reserve_amount: String,
    /// Commission group total.
    pub commission_group_total: String,
    /// Cost of sales.
    pub cost_of_sales: String,
    /// Income tax line.
    pub income_tax: String,
    /// Total cost.
    pub total_cost: String,
    /// Profit.
    pub profit: String,
    /// Profit as an unrounded percentage.
    pub profit_ratio: String,
    /// Cost of sales as a rounded percentage.
    pub cost_of_sales_ratio: String,
}

impl FinancialsDisplay {
    /// Formats every figure of `financials` using `config`.
    pub fn from_financials(financials: &DerivedFinancials, config: &DisplayConfig) -> Self {
        let money = |amount: Decimal| format_currency(amount, config);

        Self {
            revenue_one_time: money(financials.revenue_one_time),
            revenue_monthly: money(financials.revenue_monthly),
            revenue: money(financials.revenue),
            cost_one_time: money(financials.cost_one_time),
            cost_monthly: money(financials.cost_monthly),
            cost_total: money(financials.cost_total),
            operating_cost_amount: money(financials.operating_cost_amount),
            customer_care_cost_amount: money(financials.customer_care_cost_amount),
            management_cost: money(financials.management_cost),
            commission_amount: money(financials.commission_amount),
            diplomatic_amount: money(financials.diplomatic_amount),
            customer_amount: money(financials.customer_amount),
            reserve_amount: money(financials.reserve_amount),
            commission_group_total: money(financials.commission_group_total),
            cost_of_sales: money(financials.cost_of_sales),
            income_tax: money(financials.income_tax),
            total_cost: money(financials.total_cost),
            profit: money(financials.profit),
            profit_ratio: format_percent(financials.profit_ratio, None),
            cost_of_sales_ratio: format_percent(
                financials.cost_of_sales_ratio,
                Some(config.cost_of_sales_ratio_decimals),
            ),
        }
    }
}

/// Formats a currency amount.
///
/// # Examples
///
/// ```
/// use perf_engine::config::DisplayConfig;
/// use perf_engine::display::format_currency;
/// use rust_decimal::Decimal;
///
/// let config = DisplayConfig::default();
/// assert_eq!(format_currency(Decimal::new(1234567, 0), &config), "1.234.567 ₫");
/// assert_eq!(format_currency(Decimal::new(-100, 0), &config), "-100 ₫");
/// ```
pub fn format_currency(amount: Decimal, config: &DisplayConfig) -> String {
    let rounded = amount.round_dp_with_strategy(
        config.currency_decimals,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!(
        "{:.prec$}",
        rounded.abs(),
        prec = config.currency_decimals as usize
    );
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut number = group_thousands(integer, &config.thousands_separator);
    if let Some(fraction) = fraction {
        number.push_str(&config.decimal_separator);
        number.push_str(fraction);
    }

    let sign = if negative { "-" } else { "" };
    match config.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, config.currency_symbol, number),
        SymbolPosition::Suffix => format!("{}{} {}", sign, number, config.currency_symbol),
    }
}

/// Formats a fractional ratio as a percentage.
///
/// `decimals` of `None` prints the percentage as computed; `Some(n)` rounds
/// it to `n` places.
///
/// # Examples
///
/// ```
/// use perf_engine::display::format_percent;
///
/// assert_eq!(format_percent(-0.1, None), "-10%");
/// assert_eq!(format_percent(0.123456, Some(2)), "12.35%");
/// assert_eq!(format_percent(f64::NAN, None), "NaN%");
/// assert_eq!(format_percent(f64::INFINITY, Some(2)), "Infinity%");
/// ```
pub fn format_percent(ratio: f64, decimals: Option<u32>) -> String {
    if ratio.is_nan() {
        return "NaN%".to_string();
    }
    if ratio.is_infinite() {
        return if ratio > 0.0 {
            "Infinity%".to_string()
        } else {
            "-Infinity%".to_string()
        };
    }

    let mut percent = ratio * 100.0;
    if percent == 0.0 {
        // drop the sign of -0.0
        percent = 0.0;
    }

    match decimals {
        Some(places) => format!("{:.*}%", places as usize, percent),
        None => format!("{}%", percent),
    }
}

fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
