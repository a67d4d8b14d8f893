//! HTTP request handlers for the Balance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_balance_report, format_diff};
use crate::config::BalanceConfig;
use crate::error::EngineResult;
use crate::models::{BalanceReport, TableRow};
use crate::render::render_banner_html;

use super::request::BalanceRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/balance", post(balance_handler))
        .route("/balance/banner", post(banner_handler))
        .with_state(state)
}

/// Handler for POST /balance.
///
/// Returns the full balance report as JSON.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    match handle_request(&state, payload, correlation_id) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

/// Handler for POST /balance/banner.
///
/// Returns only the banner as an HTML fragment.
async fn banner_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing banner request");

    match handle_request(&state, payload, correlation_id) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_banner_html(&report.banner_lines),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

/// Validates the payload and computes the report.
fn handle_request(
    state: &AppState,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<BalanceReport, ApiErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        let error = rejection_to_error(rejection, correlation_id);
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    })?;

    let row_count = request.rows.len();
    let config = request_config(state.config(), &request).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Rejected threshold overrides"
        );
        ApiErrorResponse::from(err)
    })?;

    let rows: Vec<TableRow> = request.rows.into_iter().map(Into::into).collect();
    let report = compute_balance_report(&rows, &config);

    info!(
        correlation_id = %correlation_id,
        report_id = %report.report_id,
        rows = row_count,
        balance = %format_diff(report.cumulative_diff()),
        banner_lines = report.banner_lines.len(),
        warnings = report.audit_trace.warnings.len(),
        duration_us = report.audit_trace.duration_us,
        "Balance calculation completed"
    );

    Ok(report)
}

/// Applies per-request threshold overrides to the configured values.
fn request_config(base: &BalanceConfig, request: &BalanceRequest) -> EngineResult<BalanceConfig> {
    let config = base.with_overrides(request.expected_daily_hours, request.overtime_limit);
    config.validate()?;
    Ok(config)
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
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
    }
}
