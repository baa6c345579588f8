//! Payroll domain module.
//!
//! Turns a trainer's contracts, sessions and compensation rules into a
//! monthly payroll and new-business revenue report.
//!
//! # Module Structure
//!
//! - `contract` - PT membership contracts
//! - `session` - PT session records
//! - `staff` - Trainer settings and member directory entries
//! - `rules` - Commission tiers and session-price tiers
//! - `effective_rate` - Override-or-tiered rate resolution
//! - `report` - Report views returned to callers
//! - `calculator` - The monthly calculation itself

mod calculator;
mod contract;
mod effective_rate;
mod report;
mod rules;
mod session;
mod staff;

pub use calculator::{PayrollInputs, RevenueSalaryCalculator, WITHHOLDING_RATE};
pub use contract::{MembershipContract, PaymentMethod, RegistrationType};
pub use effective_rate::{resolve_effective_rate, EffectiveRate, RateSource};
pub use report::{AnnualPayroll, AnnualTotals, MonthlyPayroll, RevenueReportRow, SalaryReportRow};
pub use rules::{
    resolve_commission_tier, suggest_session_price, CommissionRule, CommissionTier,
    SessionPriceRule,
};
pub use session::{PtSession, SessionStatus};
pub use staff::{Member, TrainerSettings};
