//! Payroll HTTP adapter module.
//!
//! Provides REST API endpoints for payroll and pricing queries.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{PayrollApiError, PayrollAppState};
pub use routes::payroll_routes;
