//! In-memory implementation of PayrollReader.
//!
//! Useful for testing and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CenterId, DateWindow, TrainerId};
use crate::domain::payroll::{
    CommissionRule, Member, MembershipContract, PtSession, SessionPriceRule, TrainerSettings,
};
use crate::ports::{PayrollError, PayrollReader};

#[derive(Debug, Default)]
struct PayrollStore {
    trainers: HashMap<TrainerId, CenterId>,
    memberships: Vec<MembershipContract>,
    sessions: Vec<PtSession>,
    settings: Vec<TrainerSettings>,
    commission_rules: HashMap<CenterId, Vec<CommissionRule>>,
    session_price_rules: HashMap<CenterId, Vec<SessionPriceRule>>,
    members: Vec<Member>,
}

/// In-memory payroll data store
#[derive(Debug, Clone, Default)]
pub struct InMemoryPayrollReader {
    store: Arc<RwLock<PayrollStore>>,
}

impl InMemoryPayrollReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_trainer(&self, trainer_id: TrainerId, center_id: CenterId) {
        self.store.write().await.trainers.insert(trainer_id, center_id);
    }

    pub async fn add_membership(&self, membership: MembershipContract) {
        self.store.write().await.memberships.push(membership);
    }

    pub async fn add_session(&self, session: PtSession) {
        self.store.write().await.sessions.push(session);
    }

    /// Replaces any settings already stored for the same trainer and center.
    pub async fn set_trainer_settings(&self, settings: TrainerSettings) {
        let mut store = self.store.write().await;
        store
            .settings
            .retain(|s| !(s.trainer_id == settings.trainer_id && s.center_id == settings.center_id));
        store.settings.push(settings);
    }

    pub async fn add_commission_rule(&self, center_id: CenterId, rule: CommissionRule) {
        self.store
            .write()
            .await
            .commission_rules
            .entry(center_id)
            .or_default()
            .push(rule);
    }

    pub async fn add_session_price_rule(&self, center_id: CenterId, rule: SessionPriceRule) {
        self.store
            .write()
            .await
            .session_price_rules
            .entry(center_id)
            .or_default()
            .push(rule);
    }

    pub async fn add_member(&self, member: Member) {
        self.store.write().await.members.push(member);
    }

    /// Renames a member in place; returns false if the member is unknown.
    pub async fn rename_member(&self, member: &Member) -> bool {
        let mut store = self.store.write().await;
        match store.members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => {
                existing.name = member.name.clone();
                true
            }
            None => false,
        }
    }
}

fn ended_within(session: &PtSession, window: &DateWindow) -> bool {
    session
        .end_time
        .as_ref()
        .and_then(|end| end.parse())
        .is_some_and(|ended| window.contains(ended))
}

fn is_active_during(
    membership: &MembershipContract,
    window: &DateWindow,
    sessions: &[PtSession],
) -> bool {
    if let Some(signed) = membership.contract_date.parse() {
        if signed >= window.end_exclusive() {
            return false;
        }
        if window.contains(signed) {
            return true;
        }
    }
    membership.remaining_sessions > 0
        || sessions
            .iter()
            .any(|s| s.membership_id == membership.id && ended_within(s, window))
}

#[async_trait]
impl PayrollReader for InMemoryPayrollReader {
    async fn trainer_center(&self, trainer_id: TrainerId) -> Result<CenterId, PayrollError> {
        self.store
            .read()
            .await
            .trainers
            .get(&trainer_id)
            .copied()
            .ok_or(PayrollError::TrainerNotFound(trainer_id))
    }

    async fn memberships_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<MembershipContract>, PayrollError> {
        let store = self.store.read().await;
        Ok(store
            .memberships
            .iter()
            .filter(|m| m.trainer_id == trainer_id)
            .filter(|m| is_active_during(m, &window, &store.sessions))
            .cloned()
            .collect())
    }

    async fn sessions_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<PtSession>, PayrollError> {
        let store = self.store.read().await;
        Ok(store
            .sessions
            .iter()
            .filter(|s| s.trainer_id == trainer_id && ended_within(s, &window))
            .cloned()
            .collect())
    }

    async fn trainer_settings(
        &self,
        trainer_id: TrainerId,
        center_id: CenterId,
    ) -> Result<Option<TrainerSettings>, PayrollError> {
        let store = self.store.read().await;
        Ok(store
            .settings
            .iter()
            .find(|s| s.trainer_id == trainer_id && s.center_id == center_id)
            .cloned())
    }

    async fn commission_rules(&self, center_id: CenterId) -> Result<Vec<CommissionRule>, PayrollError> {
        let store = self.store.read().await;
        Ok(store.commission_rules.get(&center_id).cloned().unwrap_or_default())
    }

    async fn session_price_rules(
        &self,
        center_id: CenterId,
    ) -> Result<Vec<SessionPriceRule>, PayrollError> {
        let store = self.store.read().await;
        Ok(store.session_price_rules.get(&center_id).cloned().unwrap_or_default())
    }

    async fn members(&self) -> Result<Vec<Member>, PayrollError> {
        Ok(self.store.read().await.members.clone())
    }
}
