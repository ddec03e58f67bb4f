//! Request types for the Performance Financial Engine API.
//!
//! This module defines the JSON request structures for the
//! `/performances/calculate` endpoint and their field validation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::AMOUNT_OVERFLOW_MESSAGE;
use crate::error::{EngineError, EngineResult};
use crate::models::{PerformanceCostCoefficients, RevenueDirection, RevenueLineItem, RevenueType};

/// List name for revenue items in field paths.
pub const REVENUE_INPUT: &str = "revenue_input";

/// List name for cost items in field paths.
pub const REVENUE_OUTPUT: &str = "revenue_output";

/// Request body for the `/performances/calculate` endpoint.
///
/// Coefficients come from `coefficients` when present; otherwise the preset
/// named by `preset`, or the configured default preset, is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Backend identifier of the performance, echoed in the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_id: Option<String>,
    /// Revenue line items.
    #[serde(default)]
    pub revenue_input: Vec<LineItemRequest>,
    /// Cost line items.
    #[serde(default)]
    pub revenue_output: Vec<LineItemRequest>,
    /// Explicit cost coefficients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<PerformanceCostCoefficients>,
    /// Name of a configured coefficient preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

/// A line item as sent by the performance view.
///
/// The direction is implied by the list the item arrives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Unit price as a decimal string.
    pub price: Decimal,
    /// Number of units.
    pub quantity: u32,
    /// Billing basis.
    #[serde(rename = "type")]
    pub item_type: RevenueType,
}

impl LineItemRequest {
    /// Converts the request item into a domain line item.
    pub fn into_line_item(self, direction: RevenueDirection) -> RevenueLineItem {
        RevenueLineItem {
            price: self.price,
            quantity: self.quantity,
            item_type: self.item_type,
            direction,
        }
    }
}

impl CalculationRequest {
    /// Checks every field and reports all failures at once.
    ///
    /// Fails with [`EngineError::Validation`] mapping field paths such as
    /// `revenue_input.0.price` to messages.
    pub fn validate(&self) -> EngineResult<()> {
        let mut errors = Vec::new();

        for (list, items) in [
            (REVENUE_INPUT, &self.revenue_input),
            (REVENUE_OUTPUT, &self.revenue_output),
        ] {
            for (index, item) in items.iter().enumerate() {
                if item.price.is_sign_negative() && !item.price.is_zero() {
                    errors.push(EngineError::InvalidLineItem {
                        list: list.to_string(),
                        index,
                        field: "price".to_string(),
                        message: "must not be negative".to_string(),
                    });
                } else if item.price.checked_mul(Decimal::from(item.quantity)).is_none() {
                    errors.push(EngineError::InvalidLineItem {
                        list: list.to_string(),
                        index,
                        field: "price".to_string(),
                        message: AMOUNT_OVERFLOW_MESSAGE.to_string(),
                    });
                }
            }
        }

        if let Some(coefficients) = &self.coefficients {
            for (field, rate) in coefficients.fields() {
                if rate.is_sign_negative() && !rate.is_zero() {
                    errors.push(EngineError::InvalidCoefficient {
                        field: field.to_string(),
                        message: "must not be negative".to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        let fields: BTreeMap<String, String> =
            errors.iter().filter_map(EngineError::field_error).collect();

        Err(EngineError::Validation { fields })
    }

    /// Splits the request into domain input and output line items.
    pub fn into_line_items(self) -> (Vec<RevenueLineItem>, Vec<RevenueLineItem>) {
        let input = self
            .revenue_input
            .into_iter()
            .map(|item| item.into_line_item(RevenueDirection::In))
            .collect();
        let output = self
            .revenue_output
            .into_iter()
            .map(|item| item.into_line_item(RevenueDirection::Out))
            .collect();
        (input, output)
    }
}
