//! GetAnnualPayrollHandler - Twelve monthly payrolls for one trainer-year.
//!
//! Sessions, settings, rules and members are fetched once for the year;
//! contracts are fetched per month so each report only carries the
//! memberships active around that month.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::foundation::{DateWindow, ReportingMonth, TrainerId};
use crate::domain::payroll::{AnnualPayroll, PayrollInputs, RevenueSalaryCalculator};
use crate::ports::{MemberDirectory, PayrollError, PayrollReader};

#[derive(Debug, Clone)]
pub struct GetAnnualPayrollQuery {
    pub trainer_id: TrainerId,
    pub year: i32,
}

pub type GetAnnualPayrollResult = AnnualPayroll;

pub struct GetAnnualPayrollHandler {
    reader: Arc<dyn PayrollReader>,
    directory: Arc<dyn MemberDirectory>,
}

impl GetAnnualPayrollHandler {
    pub fn new(reader: Arc<dyn PayrollReader>, directory: Arc<dyn MemberDirectory>) -> Self {
        Self { reader, directory }
    }

    pub async fn handle(
        &self,
        query: GetAnnualPayrollQuery,
    ) -> Result<GetAnnualPayrollResult, PayrollError> {
        let months = ReportingMonth::months_of_year(query.year)?;
        let january = ReportingMonth::try_new(query.year, 1)?;
        let december = ReportingMonth::try_new(query.year, 12)?;
        let trainer_id = query.trainer_id;
        let center_id = self.reader.trainer_center(trainer_id).await?;

        let year_window = DateWindow::spanning(january.previous(), december);
        let membership_fetches = months.iter().map(|month| {
            self.reader
                .memberships_for_trainer(trainer_id, DateWindow::spanning(month.previous(), *month))
        });

        let (memberships_by_month, sessions, settings, commission_rules, members) = tokio::try_join!(
            try_join_all(membership_fetches),
            self.reader.sessions_for_trainer(trainer_id, year_window),
            self.reader.trainer_settings(trainer_id, center_id),
            self.reader.commission_rules(center_id),
            self.directory.snapshot(),
        )?;

        let monthly = months
            .iter()
            .zip(memberships_by_month.iter())
            .map(|(month, memberships)| {
                RevenueSalaryCalculator::calculate(
                    *month,
                    &PayrollInputs {
                        memberships,
                        sessions: &sessions,
                        trainer_settings: settings.as_ref(),
                        commission_rules: &commission_rules,
                        members: members.members(),
                    },
                )
            })
            .collect();

        let annual = AnnualPayroll::from_months(query.year, monthly);

        tracing::info!(
            %trainer_id,
            year = query.year,
            net_salary = annual.totals.net_salary,
            "Annual payroll calculated"
        );

        Ok(annual)
    }
}
