//! Configuration types for the financial engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::PerformanceCostCoefficients;

/// Metadata about the engine deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the deployment.
    pub name: String,
    /// Version of the configuration set.
    pub version: String,
    /// ISO 4217 code of the currency amounts are kept in (e.g., "VND").
    pub currency_code: String,
}

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// Symbol before the amount (`$1,000`).
    Prefix,
    /// Symbol after the amount (`1.000 ₫`).
    Suffix,
}

/// How derived figures are rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol.
    pub currency_symbol: String,
    /// Placement of the currency symbol.
    pub symbol_position: SymbolPosition,
    /// Separator between thousands groups.
    pub thousands_separator: String,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: String,
    /// Fraction digits shown for currency amounts.
    pub currency_decimals: u32,
    /// Fraction digits shown for the cost-of-sales percentage.
    ///
    /// The profit percentage is never rounded.
    pub cost_of_sales_ratio_decimals: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₫".to_string(),
            symbol_position: SymbolPosition::Suffix,
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            currency_decimals: 0,
            cost_of_sales_ratio_decimals: 2,
        }
    }
}

/// A named set of cost coefficients.
#[derive(Debug, Clone, Deserialize)]
pub struct CoefficientPreset {
    /// What the preset is used for.
    pub description: String,
    /// The six rates.
    pub coefficients: PerformanceCostCoefficients,
}

/// Presets configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetsConfig {
    /// Name of the preset used when a request names none.
    pub default_preset: String,
    /// Map of preset name to preset.
    pub presets: HashMap<String, CoefficientPreset>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    display: DisplayConfig,
    presets: HashMap<String, CoefficientPreset>,
    default_preset: String,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        display: DisplayConfig,
        presets: HashMap<String, CoefficientPreset>,
        default_preset: String,
    ) -> Self {
        Self {
            metadata,
            display,
            presets,
            default_preset,
        }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Returns all coefficient presets.
    pub fn presets(&self) -> &HashMap<String, CoefficientPreset> {
        &self.presets
    }

    /// Returns the name of the default preset.
    pub fn default_preset(&self) -> &str {
        &self.default_preset
    }
}
