//! Payroll and revenue report views.

use serde::Serialize;

use crate::domain::foundation::{MemberId, MembershipId, Percentage, RecordDate};

use super::{PaymentMethod, RateSource, RegistrationType};

/// Payroll and revenue figures for one trainer-month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayroll {
    pub year: i32,
    pub month: u32,

    /// Billed value of sessions that ended this month.
    pub total_revenue: f64,
    pub total_sessions_completed: u32,

    /// Face value of contracts signed this month; drives tier selection.
    pub new_contract_revenue: f64,
    /// Rate from the matched commission tier (0 when none matched).
    pub auto_commission_rate: Percentage,
    pub incentive: f64,

    /// Sum of `revenue_from_member` across salary rows.
    pub lesson_commission: f64,
    pub base_salary: f64,
    pub total_salary_before_deduction: f64,
    /// Flat withholding taken from the gross.
    pub deduction: f64,
    pub net_salary: f64,

    pub target_revenue: Option<f64>,
    /// New-contract revenue as a percentage of the target.
    pub target_achievement: Option<f64>,

    pub salary_report: Vec<SalaryReportRow>,
    pub revenue_report: Vec<RevenueReportRow>,
}

/// Commission earned from one membership this month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryReportRow {
    pub membership_id: MembershipId,
    pub member_id: MemberId,
    pub member_name: Option<String>,
    pub total_sessions: u32,
    pub remaining_sessions: u32,
    pub sessions_this_month: u32,
    pub sessions_last_month: u32,
    pub session_price: f64,
    pub commission_rate: Percentage,
    pub rate_source: RateSource,
    pub revenue_from_member: f64,
}

/// A contract signed in the reporting month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReportRow {
    pub membership_id: MembershipId,
    pub member_id: MemberId,
    pub member_name: Option<String>,
    pub contract_date: RecordDate,
    pub registration_type: RegistrationType,
    pub payment_method: PaymentMethod,
    pub total_sessions: u32,
    pub session_price: f64,
    pub total_amount: f64,
}

/// Twelve monthly reports for a trainer plus their sums.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualPayroll {
    pub year: i32,
    pub months: Vec<MonthlyPayroll>,
    pub totals: AnnualTotals,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualTotals {
    pub total_revenue: f64,
    pub total_sessions_completed: u32,
    pub new_contract_revenue: f64,
    pub lesson_commission: f64,
    pub incentive: f64,
    pub base_salary: f64,
    pub total_salary_before_deduction: f64,
    pub net_salary: f64,
}

impl AnnualPayroll {
    pub fn from_months(year: i32, months: Vec<MonthlyPayroll>) -> Self {
        let totals = months.iter().fold(AnnualTotals::default(), |mut acc, m| {
            acc.total_revenue += m.total_revenue;
            acc.total_sessions_completed += m.total_sessions_completed;
            acc.new_contract_revenue += m.new_contract_revenue;
            acc.lesson_commission += m.lesson_commission;
            acc.incentive += m.incentive;
            acc.base_salary += m.base_salary;
            acc.total_salary_before_deduction += m.total_salary_before_deduction;
            acc.net_salary += m.net_salary;
            acc
        });
        Self {
            year,
            months,
            totals,
        }
    }
}
