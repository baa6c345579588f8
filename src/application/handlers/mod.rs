//! Application handlers.
//!
//! Query handlers that orchestrate domain calculations over port data.

pub mod payroll;

pub use payroll::{
    GetAnnualPayrollHandler, GetAnnualPayrollQuery, GetAnnualPayrollResult,
    GetMonthlyPayrollHandler, GetMonthlyPayrollQuery, GetMonthlyPayrollResult,
    RefetchMemberDirectoryHandler, RefetchMemberDirectoryResult, SessionPriceSuggestion,
    SuggestSessionPriceHandler, SuggestSessionPriceQuery,
};
