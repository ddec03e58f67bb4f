//! Revenue line item model and related types.
//!
//! This module defines the [`RevenueLineItem`] struct along with the
//! [`RevenueType`] and [`RevenueDirection`] enums used to partition line
//! items during a financial calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a line item is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueType {
    /// Billed once.
    OneTime,
    /// Billed every month.
    EveryMonth,
}

/// Which side of a performance a line item belongs to.
///
/// `In` items are revenue; `Out` items are the costs paid to suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueDirection {
    /// Revenue received from the customer.
    In,
    /// Cost paid out to a supplier.
    Out,
}

/// A single priced line on a performance.
///
/// # Example
///
/// ```
/// use perf_engine::models::{RevenueDirection, RevenueLineItem, RevenueType};
/// use rust_decimal::Decimal;
///
/// let item = RevenueLineItem {
///     price: Decimal::new(100, 0),
///     quantity: 2,
///     item_type: RevenueType::OneTime,
///     direction: RevenueDirection::In,
/// };
/// assert_eq!(item.amount(), Some(Decimal::new(200, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueLineItem {
    /// Unit price. Serialized as a decimal string.
    ///
    /// Being a `Decimal`, a malformed price (`"12abc"`) is rejected when the
    /// item is deserialized. It never reaches the calculation as NaN.
    pub price: Decimal,
    /// Number of units.
    pub quantity: u32,
    /// Billing basis of the item.
    #[serde(rename = "type")]
    pub item_type: RevenueType,
    /// Side of the performance the item belongs to.
    pub direction: RevenueDirection,
}

impl RevenueLineItem {
    /// Returns `price × quantity`, or `None` if it overflows `Decimal`.
    pub fn amount(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    /// Returns true if the item is billed once.
    pub fn is_one_time(&self) -> bool {
        self.item_type == RevenueType::OneTime
    }

    /// Returns true if the item is billed every month.
    pub fn is_monthly(&self) -> bool {
        self.item_type == RevenueType::EveryMonth
    }
}
