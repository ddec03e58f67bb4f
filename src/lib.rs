//! Performance Financial Engine for the CIMS reseller dashboard
//!
//! This crate derives revenue, tiered costs, profit and ratios for a telecom
//! service "performance" from its revenue line items and cost coefficients,
//! and serves the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
