//! GetMonthlyPayrollHandler - Query handler for a trainer's monthly payroll.
//!
//! Loads contracts, sessions, settings, commission rules and the member directory
//! concurrently, then runs the calculator over the joined rows.

use std::sync::Arc;

use crate::domain::foundation::{DateWindow, ReportingMonth, TrainerId};
use crate::domain::payroll::{MonthlyPayroll, PayrollInputs, RevenueSalaryCalculator};
use crate::ports::{MemberDirectory, PayrollError, PayrollReader};

/// Query for one trainer-month.
#[derive(Debug, Clone)]
pub struct GetMonthlyPayrollQuery {
    pub trainer_id: TrainerId,
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

/// Result of successful monthly payroll query.
pub type GetMonthlyPayrollResult = MonthlyPayroll;

/// Handler for a trainer's monthly payroll.
pub struct GetMonthlyPayrollHandler {
    reader: Arc<dyn PayrollReader>,
    directory: Arc<dyn MemberDirectory>,
}

impl GetMonthlyPayrollHandler {
    pub fn new(reader: Arc<dyn PayrollReader>, directory: Arc<dyn MemberDirectory>) -> Self {
        Self { reader, directory }
    }

    pub async fn handle(
        &self,
        query: GetMonthlyPayrollQuery,
    ) -> Result<GetMonthlyPayrollResult, PayrollError> {
        let month = ReportingMonth::try_new(query.year, query.month)?;
        let trainer_id = query.trainer_id;
        let center_id = self.reader.trainer_center(trainer_id).await?;

        // Previous month is included so last-month session counts have their rows.
        let window = DateWindow::spanning(month.previous(), month);

        let (memberships, sessions, settings, commission_rules, members) = tokio::try_join!(
            self.reader.memberships_for_trainer(trainer_id, window),
            self.reader.sessions_for_trainer(trainer_id, window),
            self.reader.trainer_settings(trainer_id, center_id),
            self.reader.commission_rules(center_id),
            self.directory.snapshot(),
        )?;

        tracing::debug!(
            %trainer_id,
            %center_id,
            period = %month,
            memberships = memberships.len(),
            sessions = sessions.len(),
            "Loaded payroll inputs"
        );

        let payroll = RevenueSalaryCalculator::calculate(
            month,
            &PayrollInputs {
                memberships: &memberships,
                sessions: &sessions,
                trainer_settings: settings.as_ref(),
                commission_rules: &commission_rules,
                members: members.members(),
            },
        );

        tracing::info!(
            %trainer_id,
            period = %month,
            net_salary = payroll.net_salary,
            "Monthly payroll calculated"
        );

        Ok(payroll)
    }
}
