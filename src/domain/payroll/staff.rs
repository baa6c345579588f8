//! Trainer compensation settings and the member directory entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CenterId, MemberId, TrainerId};

/// Per-trainer, per-center compensation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerSettings {
    pub trainer_id: TrainerId,
    pub center_id: CenterId,
    /// Fixed monthly salary paid regardless of sessions.
    pub base_salary: f64,
    /// Monthly new-contract revenue target, if one is set.
    #[serde(default)]
    pub target_revenue: Option<f64>,
}

/// Display identity of a member, joined into report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}
