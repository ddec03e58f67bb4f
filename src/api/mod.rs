//! HTTP API module for the Performance Financial Engine.
//!
//! This module provides the REST endpoints the performance view calls to
//! derive revenue, cost, profit and ratio figures.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, perform_calculation};
pub use request::{CalculationRequest, LineItemRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
