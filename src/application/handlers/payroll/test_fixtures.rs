//! Shared fixtures for payroll handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::memory::{CachedMemberDirectory, InMemoryPayrollReader};
use crate::domain::foundation::{
    CenterId, DateWindow, MemberId, MembershipId, Percentage, PtSessionId, RecordDate, TrainerId,
};
use crate::domain::payroll::{
    CommissionRule, Member, MembershipContract, PaymentMethod, PtSession, RegistrationType,
    SessionPriceRule, SessionStatus, TrainerSettings,
};
use crate::ports::{MemberDirectory, PayrollError, PayrollReader};

pub struct Studio {
    pub reader: InMemoryPayrollReader,
    pub trainer_id: TrainerId,
    pub center_id: CenterId,
}

impl Studio {
    pub async fn new() -> Self {
        let reader = InMemoryPayrollReader::new();
        let trainer_id = TrainerId::new();
        let center_id = CenterId::new();
        reader.add_trainer(trainer_id, center_id).await;
        Self {
            reader,
            trainer_id,
            center_id,
        }
    }

    pub fn reader(&self) -> Arc<dyn PayrollReader> {
        Arc::new(self.reader.clone())
    }

    pub fn directory(&self) -> Arc<dyn MemberDirectory> {
        Arc::new(CachedMemberDirectory::new(self.reader()))
    }

    pub async fn contract(&self, name: &str, contract_date: &str, total: u32, price: f64) -> MembershipContract {
        let member = Member {
            id: MemberId::new(),
            name: name.to_string(),
        };
        let membership = MembershipContract {
            id: MembershipId::new(),
            member_id: member.id,
            trainer_id: self.trainer_id,
            contract_date: RecordDate::from(contract_date),
            start_date: RecordDate::from(contract_date),
            total_sessions: total,
            remaining_sessions: total,
            session_price: price,
            commission_rate: None,
            registration_type: RegistrationType::New,
            payment_method: PaymentMethod::Card,
        };
        self.reader.add_member(member).await;
        self.reader.add_membership(membership.clone()).await;
        membership
    }

    pub async fn session(&self, membership: &MembershipContract, end_time: &str) {
        self.reader
            .add_session(PtSession {
                id: PtSessionId::new(),
                trainer_id: self.trainer_id,
                membership_id: membership.id,
                status: SessionStatus::Completed,
                end_time: Some(RecordDate::from(end_time)),
                price: None,
            })
            .await;
    }

    pub async fn commission_rule(&self, threshold: f64, rate: f64, incentive: f64) {
        self.reader
            .add_commission_rule(
                self.center_id,
                CommissionRule {
                    threshold,
                    commission_rate: Percentage::new(rate),
                    incentive,
                },
            )
            .await;
    }

    pub async fn price_rule(&self, min: u32, max: Option<u32>, price: f64) {
        self.reader
            .add_session_price_rule(
                self.center_id,
                SessionPriceRule {
                    min_sessions: min,
                    max_sessions: max,
                    price_per_session: price,
                },
            )
            .await;
    }

    pub async fn base_salary(&self, base_salary: f64) {
        self.reader
            .set_trainer_settings(TrainerSettings {
                trainer_id: self.trainer_id,
                center_id: self.center_id,
                base_salary,
                target_revenue: None,
            })
            .await;
    }
}

/// Reader whose every query fails with a database error.
pub struct FailingReader;

#[async_trait]
impl PayrollReader for FailingReader {
    async fn trainer_center(&self, _trainer_id: TrainerId) -> Result<CenterId, PayrollError> {
        Ok(CenterId::new())
    }

    async fn memberships_for_trainer(
        &self,
        _trainer_id: TrainerId,
        _window: DateWindow,
    ) -> Result<Vec<MembershipContract>, PayrollError> {
        Err(PayrollError::Database("Simulated failure".to_string()))
    }

    async fn sessions_for_trainer(
        &self,
        _trainer_id: TrainerId,
        _window: DateWindow,
    ) -> Result<Vec<PtSession>, PayrollError> {
        Err(PayrollError::Database("Simulated failure".to_string()))
    }

    async fn trainer_settings(
        &self,
        _trainer_id: TrainerId,
        _center_id: CenterId,
    ) -> Result<Option<TrainerSettings>, PayrollError> {
        Ok(None)
    }

    async fn commission_rules(&self, _center_id: CenterId) -> Result<Vec<CommissionRule>, PayrollError> {
        Ok(vec![])
    }

    async fn session_price_rules(
        &self,
        _center_id: CenterId,
    ) -> Result<Vec<SessionPriceRule>, PayrollError> {
        Err(PayrollError::Database("Simulated failure".to_string()))
    }

    async fn members(&self) -> Result<Vec<Member>, PayrollError> {
        Ok(vec![])
    }
}

/// Delegates to an in-memory reader but fails session-price lookups.
pub struct PriceRulesUnavailable(pub InMemoryPayrollReader);

#[async_trait]
impl PayrollReader for PriceRulesUnavailable {
    async fn trainer_center(&self, trainer_id: TrainerId) -> Result<CenterId, PayrollError> {
        self.0.trainer_center(trainer_id).await
    }

    async fn memberships_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<MembershipContract>, PayrollError> {
        self.0.memberships_for_trainer(trainer_id, window).await
    }

    async fn sessions_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<PtSession>, PayrollError> {
        self.0.sessions_for_trainer(trainer_id, window).await
    }

    async fn trainer_settings(
        &self,
        trainer_id: TrainerId,
        center_id: CenterId,
    ) -> Result<Option<TrainerSettings>, PayrollError> {
        self.0.trainer_settings(trainer_id, center_id).await
    }

    async fn commission_rules(&self, center_id: CenterId) -> Result<Vec<CommissionRule>, PayrollError> {
        self.0.commission_rules(center_id).await
    }

    async fn session_price_rules(
        &self,
        _center_id: CenterId,
    ) -> Result<Vec<SessionPriceRule>, PayrollError> {
        Err(PayrollError::Database("Price rules unavailable".to_string()))
    }

    async fn members(&self) -> Result<Vec<Member>, PayrollError> {
        self.0.members().await
    }
}
