//! HTTP DTOs for payroll endpoints.
//!
//! Payroll is read-only and the domain views already serialize in camelCase,
//! so they are re-exported as the response bodies.

pub use crate::application::handlers::{RefetchMemberDirectoryResult, SessionPriceSuggestion};
pub use crate::domain::payroll::{
    AnnualPayroll, AnnualTotals, MonthlyPayroll, RevenueReportRow, SalaryReportRow,
};

use serde::Serialize;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::bad_request("month out of range")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn not_found_names_the_resource() {
        let error = ErrorResponse::not_found("Trainer", "abc");
        assert_eq!(error.message, "Trainer not found: abc");
    }
}
