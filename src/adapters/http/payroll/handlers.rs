//! HTTP handlers for payroll endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::handlers::{
    GetAnnualPayrollHandler, GetAnnualPayrollQuery, GetMonthlyPayrollHandler,
    GetMonthlyPayrollQuery, RefetchMemberDirectoryHandler, SuggestSessionPriceHandler,
    SuggestSessionPriceQuery,
};
use crate::domain::foundation::{CenterId, TrainerId};
use crate::ports::{MemberDirectory, PayrollError, PayrollReader};

use super::dto::{
    AnnualPayroll, ErrorResponse, MonthlyPayroll, RefetchMemberDirectoryResult,
    SessionPriceSuggestion,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Payroll API error that implements IntoResponse.
#[derive(Debug)]
pub enum PayrollApiError {
    BadRequest(String),
    NotFound { resource: &'static str, id: String },
    Internal(String),
}

impl IntoResponse for PayrollApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            PayrollApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            PayrollApiError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(resource, &id))
            }
            PayrollApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Payroll request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("Failed to load payroll data"),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<PayrollError> for PayrollApiError {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::TrainerNotFound(id) => PayrollApiError::NotFound {
                resource: "Trainer",
                id: id.to_string(),
            },
            PayrollError::InvalidInput(msg) => PayrollApiError::BadRequest(msg),
            PayrollError::Database(msg) => {
                PayrollApiError::Internal(format!("Database error: {}", msg))
            }
        }
    }
}

impl From<QueryRejection> for PayrollApiError {
    fn from(rejection: QueryRejection) -> Self {
        PayrollApiError::BadRequest(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing payroll dependencies.
#[derive(Clone)]
pub struct PayrollAppState {
    pub reader: Arc<dyn PayrollReader>,
    pub directory: Arc<dyn MemberDirectory>,
}

impl PayrollAppState {
    pub fn new(reader: Arc<dyn PayrollReader>, directory: Arc<dyn MemberDirectory>) -> Self {
        Self { reader, directory }
    }

    pub fn monthly_payroll_handler(&self) -> GetMonthlyPayrollHandler {
        GetMonthlyPayrollHandler::new(self.reader.clone(), self.directory.clone())
    }

    pub fn annual_payroll_handler(&self) -> GetAnnualPayrollHandler {
        GetAnnualPayrollHandler::new(self.reader.clone(), self.directory.clone())
    }

    pub fn session_price_handler(&self) -> SuggestSessionPriceHandler {
        SuggestSessionPriceHandler::new(self.reader.clone())
    }

    pub fn refetch_members_handler(&self) -> RefetchMemberDirectoryHandler {
        RefetchMemberDirectoryHandler::new(self.directory.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the monthly payroll endpoint.
#[derive(Debug, Deserialize)]
pub struct MonthlyPayrollParams {
    pub year: i32,
    pub month: u32,
}

/// Query parameters for the annual payroll endpoint.
#[derive(Debug, Deserialize)]
pub struct AnnualPayrollParams {
    pub year: i32,
}

/// Query parameters for the session price endpoint.
#[derive(Debug, Deserialize)]
pub struct SessionPriceParams {
    /// Number of sessions in the package being quoted.
    pub sessions: u32,
}

fn parse_trainer_id(raw: &str) -> Result<TrainerId, PayrollApiError> {
    raw.parse()
        .map_err(|_| PayrollApiError::BadRequest("Invalid trainer ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/trainers/:trainer_id/payroll?year=&month=
///
/// Returns the revenue, commission and salary report for one month.
pub async fn get_monthly_payroll(
    State(state): State<PayrollAppState>,
    Path(trainer_id_str): Path<String>,
    params: Result<Query<MonthlyPayrollParams>, QueryRejection>,
) -> Result<Json<MonthlyPayroll>, PayrollApiError> {
    let Query(params) = params?;
    let query = GetMonthlyPayrollQuery {
        trainer_id: parse_trainer_id(&trainer_id_str)?,
        year: params.year,
        month: params.month,
    };

    let handler = state.monthly_payroll_handler();
    let payroll = handler.handle(query).await?;

    Ok(Json(payroll))
}

/// GET /api/trainers/:trainer_id/payroll/annual?year=
///
/// Returns all twelve monthly reports of a year plus totals.
pub async fn get_annual_payroll(
    State(state): State<PayrollAppState>,
    Path(trainer_id_str): Path<String>,
    params: Result<Query<AnnualPayrollParams>, QueryRejection>,
) -> Result<Json<AnnualPayroll>, PayrollApiError> {
    let Query(params) = params?;
    let query = GetAnnualPayrollQuery {
        trainer_id: parse_trainer_id(&trainer_id_str)?,
        year: params.year,
    };

    let handler = state.annual_payroll_handler();
    let annual = handler.handle(query).await?;

    Ok(Json(annual))
}

/// GET /api/centers/:center_id/session-price?sessions=
///
/// Returns the suggested per-session price for a package size.
pub async fn suggest_session_price(
    State(state): State<PayrollAppState>,
    Path(center_id_str): Path<String>,
    params: Result<Query<SessionPriceParams>, QueryRejection>,
) -> Result<Json<SessionPriceSuggestion>, PayrollApiError> {
    let Query(params) = params?;
    let center_id: CenterId = center_id_str
        .parse()
        .map_err(|_| PayrollApiError::BadRequest("Invalid center ID format".to_string()))?;

    let query = SuggestSessionPriceQuery {
        center_id,
        session_count: params.sessions,
    };

    let handler = state.session_price_handler();
    let suggestion = handler.handle(query).await?;

    Ok(Json(suggestion))
}

/// POST /api/members/refetch
///
/// Reloads the member directory snapshot used for report names.
pub async fn refetch_members(
    State(state): State<PayrollAppState>,
) -> Result<Json<RefetchMemberDirectoryResult>, PayrollApiError> {
    let handler = state.refetch_members_handler();
    let result = handler.handle().await?;

    Ok(Json(result))
}
