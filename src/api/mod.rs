//! HTTP API module for the PAYE engine.
//!
//! This module provides the REST API endpoints for calculating net pay,
//! exporting summaries, and browsing the calculation history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, InputWarning, MAX_AMOUNT};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
