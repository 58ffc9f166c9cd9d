//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST endpoint for computing payroll
//! breakdowns from salary simulation requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SalaryInputRequest};
pub use response::ApiError;
pub use state::AppState;
