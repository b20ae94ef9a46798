//! HTTP request handlers for the PAYE engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payroll_with;
use crate::error::{EngineError, EngineResult};
use crate::export::{DeductionChart, render_summary};
use crate::history::HistoryService;

use super::request::{CalculationRequest, InputWarning};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/summary", post(summary_handler))
        .route("/history", get(list_history_handler).delete(clear_history_handler))
        .route("/history/:id", get(replay_history_handler))
        .route("/last-input", get(last_input_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Normalizes the request, computes the result, records it in the history
/// and remembers the input for session restore.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let (input, warnings) = request.into_input();
    log_warnings(correlation_id, &warnings);

    let start_time = Instant::now();
    let result = compute_payroll_with(state.table(), &input);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        taxable_income = %result.taxable_income,
        paye = %result.paye,
        net_pay = %result.net_pay,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    let remembered = input.clone();
    if let Err(err) =
        with_history(state.history(), move |history| history.remember_input(&remembered)).await
    {
        warn!(correlation_id = %correlation_id, error = %err, "Failed to save last input");
    }
    let (recorded_input, recorded_result) = (input.clone(), result.clone());
    let recorded = with_history(state.history(), move |history| {
        history.record(recorded_input, recorded_result)
    })
    .await;
    let history_id = match recorded {
        Ok(entry) => Some(entry.id),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to record history");
            None
        }
    };

    let chart = DeductionChart::from_result(&result);
    let response = CalculationResponse {
        history_id,
        timestamp: Utc::now(),
        input,
        result,
        chart,
        warnings,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /summary endpoint.
///
/// Returns the plain-text summary document without recording history.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let (input, warnings) = request.into_input();
    log_warnings(correlation_id, &warnings);
    let result = compute_payroll_with(state.table(), &input);
    info!(correlation_id = %correlation_id, net_pay = %result.net_pay, "Rendered summary");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_summary(&result),
    )
        .into_response()
}

/// Handler for GET /history. Entries are returned newest first.
async fn list_history_handler(State(state): State<AppState>) -> Response {
    match with_history(state.history(), |history| history.entries()).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for DELETE /history.
async fn clear_history_handler(State(state): State<AppState>) -> Response {
    match with_history(state.history(), |history| history.clear()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /history/:id.
///
/// Recalculates the stored input under the current tax table, without
/// adding a new history entry.
async fn replay_history_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(ApiError::invalid_id(rejection.body_text()))
                .into_response();
        }
    };

    let entry = match with_history(state.history(), move |history| history.find(id)).await {
        Ok(entry) => entry,
        Err(err) => {
            warn!(entry_id = %id, error = %err, "History replay failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let result = compute_payroll_with(state.table(), &entry.input);
    let response = CalculationResponse {
        history_id: Some(entry.id),
        timestamp: entry.timestamp,
        chart: DeductionChart::from_result(&result),
        input: entry.input,
        result,
        warnings: Vec::new(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for GET /last-input.
async fn last_input_handler(State(state): State<AppState>) -> Response {
    match with_history(state.history(), |history| history.last_input()).await {
        Ok(input) => (StatusCode::OK, Json(input)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Runs a history operation on the blocking thread pool, since the file
/// store does synchronous I/O under a mutex.
async fn with_history<T, F>(history: &HistoryService, operation: F) -> EngineResult<T>
where
    T: Send + 'static,
    F: FnOnce(&HistoryService) -> EngineResult<T> + Send + 'static,
{
    let history = history.clone();
    tokio::task::spawn_blocking(move || operation(&history))
        .await
        .map_err(|err| EngineError::HistoryTaskFailed {
            message: err.to_string(),
        })?
}

fn log_warnings(correlation_id: Uuid, warnings: &[InputWarning]) {
    for warning in warnings {
        warn!(
            correlation_id = %correlation_id,
            field = %warning.field,
            "{}", warning.message
        );
    }
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}
