//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain calculations and coordinates between ports.
//! Payroll is read-only, so every handler here is a query handler.

pub mod handlers;

pub use handlers::{
    GetAnnualPayrollHandler, GetAnnualPayrollQuery, GetAnnualPayrollResult,
    GetMonthlyPayrollHandler, GetMonthlyPayrollQuery, GetMonthlyPayrollResult,
    RefetchMemberDirectoryHandler, RefetchMemberDirectoryResult, SessionPriceSuggestion,
    SuggestSessionPriceHandler, SuggestSessionPriceQuery,
};
