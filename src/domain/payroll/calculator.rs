//! Monthly revenue, commission and salary calculation.
//!
//! Pure over already-fetched rows: no I/O and no failure modes. Records whose
//! dates cannot be parsed fall outside every window and are logged.

use std::collections::HashMap;

use crate::domain::foundation::{MemberId, MembershipId, ReportingMonth};

use super::{
    resolve_commission_tier, resolve_effective_rate, CommissionRule, Member, MembershipContract,
    MonthlyPayroll, PtSession, RevenueReportRow, SalaryReportRow, TrainerSettings,
};

/// Flat withholding applied to gross salary.
pub const WITHHOLDING_RATE: f64 = 0.033;

/// Rows the calculator works over, already fetched for one trainer.
///
/// `memberships` should cover contracts active in the target or previous
/// month; `sessions` must already be filtered to the trainer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayrollInputs<'a> {
    pub memberships: &'a [MembershipContract],
    pub sessions: &'a [PtSession],
    pub trainer_settings: Option<&'a TrainerSettings>,
    pub commission_rules: &'a [CommissionRule],
    pub members: &'a [Member],
}

#[derive(Debug, Clone, Copy, Default)]
struct SessionCounts {
    this_month: u32,
    last_month: u32,
}

/// Computes a trainer's monthly payroll and revenue report.
pub struct RevenueSalaryCalculator;

impl RevenueSalaryCalculator {
    pub fn calculate(month: ReportingMonth, inputs: &PayrollInputs<'_>) -> MonthlyPayroll {
        let this_month = month.window();
        let last_month = month.previous().window();

        let price_by_membership: HashMap<MembershipId, f64> = inputs
            .memberships
            .iter()
            .map(|m| (m.id, m.session_price))
            .collect();
        let names: HashMap<MemberId, &str> = inputs
            .members
            .iter()
            .map(|m| (m.id, m.name.as_str()))
            .collect();
        let member_name = |id: &MemberId| names.get(id).map(|name| name.to_string());

        // Session revenue and per-membership counts, one pass over sessions.
        let mut total_revenue = 0.0;
        let mut total_sessions_completed = 0u32;
        let mut counts: HashMap<MembershipId, SessionCounts> = HashMap::new();

        for session in inputs.sessions.iter().filter(|s| s.counts_toward_revenue()) {
            let Some(ended_at) = session
                .end_time
                .as_ref()
                .and_then(|end| end.parse_logged("end_time"))
            else {
                continue;
            };

            if this_month.contains(ended_at) {
                total_revenue += session
                    .price
                    .or_else(|| price_by_membership.get(&session.membership_id).copied())
                    .unwrap_or(0.0);
                total_sessions_completed += 1;
                counts.entry(session.membership_id).or_default().this_month += 1;
            } else if last_month.contains(ended_at) {
                counts.entry(session.membership_id).or_default().last_month += 1;
            }
        }

        // Contracts signed this month drive tier selection and the revenue report.
        let new_contracts: Vec<&MembershipContract> = inputs
            .memberships
            .iter()
            .filter(|m| m.contract_date.falls_within(&this_month, "contract_date"))
            .collect();
        let new_contract_revenue: f64 = new_contracts.iter().map(|m| m.contract_amount()).sum();

        let tier = resolve_commission_tier(inputs.commission_rules, new_contract_revenue);

        let salary_report: Vec<SalaryReportRow> = inputs
            .memberships
            .iter()
            .map(|m| {
                let SessionCounts {
                    this_month,
                    last_month,
                } = counts.get(&m.id).copied().unwrap_or_default();
                let effective = resolve_effective_rate(m.commission_rate, tier.rate);

                SalaryReportRow {
                    membership_id: m.id,
                    member_id: m.member_id,
                    member_name: member_name(&m.member_id),
                    total_sessions: m.total_sessions,
                    remaining_sessions: m.remaining_sessions,
                    sessions_this_month: this_month,
                    sessions_last_month: last_month,
                    session_price: m.session_price,
                    commission_rate: effective.rate(),
                    rate_source: effective.source(),
                    revenue_from_member: f64::from(this_month)
                        * m.session_price
                        * effective.rate().as_fraction(),
                }
            })
            .collect();

        let lesson_commission: f64 = salary_report.iter().map(|r| r.revenue_from_member).sum();

        let base_salary = inputs.trainer_settings.map_or(0.0, |s| s.base_salary);
        let total_salary_before_deduction = base_salary + lesson_commission + tier.incentive;
        let net_salary = total_salary_before_deduction * (1.0 - WITHHOLDING_RATE);
        let deduction = total_salary_before_deduction * WITHHOLDING_RATE;

        let target_revenue = inputs
            .trainer_settings
            .and_then(|s| s.target_revenue)
            .filter(|target| *target > 0.0);
        let target_achievement = target_revenue.map(|target| new_contract_revenue / target * 100.0);

        let revenue_report: Vec<RevenueReportRow> = new_contracts
            .iter()
            .map(|m| RevenueReportRow {
                membership_id: m.id,
                member_id: m.member_id,
                member_name: member_name(&m.member_id),
                contract_date: m.contract_date.clone(),
                registration_type: m.registration_type,
                payment_method: m.payment_method,
                total_sessions: m.total_sessions,
                session_price: m.session_price,
                total_amount: m.contract_amount(),
            })
            .collect();

        tracing::debug!(
            period = %month,
            total_revenue,
            total_sessions_completed,
            new_contract_revenue,
            auto_rate = tier.rate.value(),
            lesson_commission,
            net_salary,
            "Calculated monthly payroll"
        );

        MonthlyPayroll {
            year: month.year(),
            month: month.month(),
            total_revenue,
            total_sessions_completed,
            new_contract_revenue,
            auto_commission_rate: tier.rate,
            incentive: tier.incentive,
            lesson_commission,
            base_salary,
            total_salary_before_deduction,
            deduction,
            net_salary,
            target_revenue,
            target_achievement,
            salary_report,
            revenue_report,
        }
    }
}

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;
