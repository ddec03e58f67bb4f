//! Error types for the Performance Financial Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around a financial calculation.
//! Most come from configuration loading and request validation; the
//! calculation pipeline fails only when a figure overflows `Decimal`.

use std::collections::BTreeMap;

use thiserror::Error;

/// The main error type for the Performance Financial Engine.
///
/// # Example
///
/// ```
/// use perf_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A named coefficient preset was not found in the configuration.
    #[error("Coefficient preset not found: {name}")]
    PresetNotFound {
        /// The preset name that was requested.
        name: String,
    },

    /// A revenue line item contained inconsistent data.
    #[error("Invalid line item {list}[{index}].{field}: {message}")]
    InvalidLineItem {
        /// The list the item came from ("revenue_input" or "revenue_output").
        list: String,
        /// Position of the item in its list.
        index: usize,
        /// The offending field of the item.
        field: String,
        /// A description of what made the item invalid.
        message: String,
    },

    /// A cost coefficient was outside its accepted range.
    #[error("Invalid coefficient '{field}': {message}")]
    InvalidCoefficient {
        /// The coefficient field name.
        field: String,
        /// A description of what made the coefficient invalid.
        message: String,
    },

    /// One or more request fields failed validation.
    ///
    /// The map is keyed by field path (e.g. `revenue_input.0.price`).
    #[error("Validation failed for {} field(s)", .fields.len())]
    Validation {
        /// Field path to message.
        fields: BTreeMap<String, String>,
    },

    /// A derived figure fell outside the representable range.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Builds the error for a figure that does not fit in a `Decimal`.
    pub fn overflow(figure: &str) -> Self {
        EngineError::CalculationError {
            message: format!("{} exceeds the decimal range", figure),
        }
    }

    /// Returns the field path a single-field error refers to, if any.
    pub fn field_path(&self) -> Option<String> {
        match self {
            EngineError::InvalidLineItem {
                list, index, field, ..
            } => Some(format!("{}.{}.{}", list, index, field)),
            EngineError::InvalidCoefficient { field, .. } => {
                Some(format!("coefficients.{}", field))
            }
            _ => None,
        }
    }

    /// Returns the field path and bare message of a single-field error.
    pub fn field_error(&self) -> Option<(String, String)> {
        let message = match self {
            EngineError::InvalidLineItem { message, .. }
            | EngineError::InvalidCoefficient { message, .. } => message.clone(),
            _ => return None,
        };
        self.field_path().map(|path| (path, message))
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
