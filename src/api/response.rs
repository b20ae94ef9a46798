//! Response types for the PAYE engine API.
//!
//! This module defines the success bodies, the error envelope, and the
//! mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::export::DeductionChart;
use crate::models::{PayrollResult, SalaryInput};

use super::request::InputWarning;

/// Response body for a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// ID of the history entry recorded for this calculation, if recording
    /// succeeded.
    pub history_id: Option<Uuid>,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The normalized input the engine ran on.
    pub input: SalaryInput,
    /// The calculation result.
    pub result: PayrollResult,
    /// Deduction breakdown chart data.
    pub chart: DeductionChart,
    /// Adjustments made while normalizing the request.
    #[serde(default)]
    pub warnings: Vec<InputWarning>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid path parameter error response.
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::new("INVALID_ID", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidTaxTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
            EngineError::StoreIo { .. }
            | EngineError::StoreSerialization { .. }
            | EngineError::LockPoisoned
            | EngineError::HistoryTaskFailed { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "History storage failed",
                    error.to_string(),
                ),
            },
            EngineError::HistoryEntryNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "HISTORY_ENTRY_NOT_FOUND",
                    format!("History entry not found: {}", id),
                ),
            },
            EngineError::NoSavedInput => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NO_SAVED_INPUT", "No saved input available"),
            },
        }
    }
}
