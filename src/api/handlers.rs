//! HTTP request handlers for the Performance Financial Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::run_pipeline;
use crate::config::ConfigLoader;
use crate::display::FinancialsDisplay;
use crate::error::EngineResult;
use crate::models::{AuditTrace, CalculationResult};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/performances/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "engine_version": env!("CARGO_PKG_VERSION"),
        "config_version": state.config().engine().version,
    }))
}

/// Handler for POST /performances/calculate.
///
/// Accepts a performance snapshot and returns the derived figures.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response();
        }
    };

    let performance_id = request.performance_id.clone().unwrap_or_default();
    let input_count = request.revenue_input.len();
    let output_count = request.revenue_output.len();

    match perform_calculation(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                performance_id = %performance_id,
                input_items = input_count,
                output_items = output_count,
                revenue = %result.financials.revenue,
                profit = %result.financials.profit,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                performance_id = %performance_id,
                error = %err,
                "Calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates a request, resolves its coefficients and runs the pipeline.
///
/// Explicit coefficients take precedence over a named preset; with neither,
/// the configured default preset is used.
pub fn perform_calculation(
    request: CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();

    request.validate()?;

    let coefficients = match request.coefficients {
        Some(coefficients) => {
            if let Some(preset) = &request.preset {
                debug!(preset = %preset, "Explicit coefficients override the requested preset");
            }
            coefficients
        }
        None => config.resolve_coefficients(request.preset.as_deref())?,
    };

    let performance_id = request.performance_id.clone();
    let (input_items, output_items) = request.into_line_items();

    let calculation = run_pipeline(&input_items, &output_items, &coefficients, 1)?;
    let display = FinancialsDisplay::from_financials(&calculation.financials, config.display());

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        performance_id,
        financials: calculation.financials,
        display,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings: calculation.warnings,
            duration_us,
        },
    })
}
