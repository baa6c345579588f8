//! Payroll query handlers.

mod get_annual_payroll;
mod get_monthly_payroll;
mod refetch_member_directory;
mod suggest_session_price;

#[cfg(test)]
mod test_fixtures;

pub use get_annual_payroll::{GetAnnualPayrollHandler, GetAnnualPayrollQuery, GetAnnualPayrollResult};
pub use get_monthly_payroll::{
    GetMonthlyPayrollHandler, GetMonthlyPayrollQuery, GetMonthlyPayrollResult,
};
pub use refetch_member_directory::{RefetchMemberDirectoryHandler, RefetchMemberDirectoryResult};
pub use suggest_session_price::{
    SessionPriceSuggestion, SuggestSessionPriceHandler, SuggestSessionPriceQuery,
};
