//! Configuration loading and management for the Performance Financial Engine.
//!
//! This module loads engine metadata, display settings and named cost
//! coefficient presets from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use perf_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cims").unwrap();
//! println!("Loaded engine: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CoefficientPreset, DisplayConfig, EngineConfig, EngineMetadata, PresetsConfig,
    SymbolPosition,
};
