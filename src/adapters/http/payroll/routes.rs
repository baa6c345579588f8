//! HTTP routes for payroll endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_annual_payroll, get_monthly_payroll, refetch_members, suggest_session_price,
    PayrollAppState,
};

/// Creates the payroll router with all routes.
pub fn payroll_routes(state: PayrollAppState) -> Router {
    Router::new()
        // GET /api/trainers/:trainer_id/payroll
        .route("/api/trainers/:trainer_id/payroll", get(get_monthly_payroll))
        // GET /api/trainers/:trainer_id/payroll/annual
        .route("/api/trainers/:trainer_id/payroll/annual", get(get_annual_payroll))
        // GET /api/centers/:center_id/session-price
        .route("/api/centers/:center_id/session-price", get(suggest_session_price))
        // POST /api/members/refetch
        .route("/api/members/refetch", post(refetch_members))
        .with_state(state)
}
