//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PerformanceCostCoefficients;

use super::types::{
    CoefficientPreset, DisplayConfig, EngineConfig, EngineMetadata, PresetsConfig,
};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/cims/
/// ├── engine.yaml    # Deployment metadata
/// ├── display.yaml   # Currency and percentage formatting
/// └── presets.yaml   # Named cost coefficient sets
/// ```
///
/// # Example
///
/// ```no_run
/// use perf_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cims").unwrap();
/// let preset = loader.get_preset("standard").unwrap();
/// println!("Operating cost rate: {}", preset.coefficients.operating_cost);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - `default_preset` does not name a preset in `presets.yaml`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let display = Self::load_yaml::<DisplayConfig>(&path.join("display.yaml"))?;

        let presets_path = path.join("presets.yaml");
        let presets = Self::load_yaml::<PresetsConfig>(&presets_path)?;

        if !presets.presets.contains_key(&presets.default_preset) {
            return Err(EngineError::ConfigParseError {
                path: presets_path.display().to_string(),
                message: format!(
                    "default_preset '{}' is not defined in presets",
                    presets.default_preset
                ),
            });
        }

        let config = EngineConfig::new(
            metadata,
            display,
            presets.presets,
            presets.default_preset,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        self.config.display()
    }

    /// Gets a coefficient preset by name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use perf_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/cims")?;
    /// let preset = loader.get_preset("standard")?;
    /// println!("Preset: {}", preset.description);
    /// # Ok::<(), perf_engine::error::EngineError>(())
    /// ```
    pub fn get_preset(&self, name: &str) -> EngineResult<&CoefficientPreset> {
        self.config
            .presets()
            .get(name)
            .ok_or_else(|| EngineError::PresetNotFound {
                name: name.to_string(),
            })
    }

    /// Resolves the coefficients to use for a calculation.
    ///
    /// A named preset is looked up; `None` falls back to the default preset.
    pub fn resolve_coefficients(
        &self,
        preset: Option<&str>,
    ) -> EngineResult<PerformanceCostCoefficients> {
        let name = preset.unwrap_or_else(|| self.config.default_preset());
        self.get_preset(name).map(|p| p.coefficients)
    }
}
