//! PT session records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MembershipId, PtSessionId, RecordDate, TrainerId};

/// Lifecycle status of a PT session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    /// Late cancellations are still charged to the member.
    #[serde(alias = "cancelled")]
    Canceled,
}

impl SessionStatus {
    /// Completed and canceled sessions are both billed.
    pub fn counts_toward_revenue(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Canceled)
    }
}

/// One PT session drawn from a membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PtSession {
    pub id: PtSessionId,
    pub trainer_id: TrainerId,
    pub membership_id: MembershipId,
    pub status: SessionStatus,
    #[serde(default)]
    pub end_time: Option<RecordDate>,
    /// Price charged for this session; `None` falls back to the membership price.
    #[serde(default)]
    pub price: Option<f64>,
}

impl PtSession {
    pub fn counts_toward_revenue(&self) -> bool {
        self.status.counts_toward_revenue()
    }
}
