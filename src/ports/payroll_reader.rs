//! Payroll reader port (read side).
//!
//! Assembles the rows the payroll calculator needs for one trainer. Every
//! method is a plain query; callers fan them out concurrently and join the
//! results before calculating.
//!
//! # Example
//!
//! ```ignore
//! async fn load_rules(
//!     reader: &dyn PayrollReader,
//!     trainer_id: TrainerId,
//! ) -> Option<Vec<CommissionRule>> {
//!     let center_id = reader.trainer_center(trainer_id).await.ok()?;
//!     reader.commission_rules(center_id).await.ok()
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{CenterId, DateWindow, TrainerId, ValidationError};
use crate::domain::payroll::{
    CommissionRule, Member, MembershipContract, PtSession, SessionPriceRule, TrainerSettings,
};

/// Read-only port for payroll inputs.
#[async_trait]
pub trait PayrollReader: Send + Sync {
    /// Center the trainer belongs to.
    ///
    /// Returns `TrainerNotFound` for an unknown trainer.
    async fn trainer_center(&self, trainer_id: TrainerId) -> Result<CenterId, PayrollError>;

    /// Contracts of the trainer that are active at some point in `window`:
    /// signed before the window ends and either signed inside it, with
    /// sessions remaining, or with a session ending inside it.
    async fn memberships_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<MembershipContract>, PayrollError>;

    /// The trainer's sessions that ended inside `window`.
    async fn sessions_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<PtSession>, PayrollError>;

    /// Compensation settings, if configured for this trainer at this center.
    async fn trainer_settings(
        &self,
        trainer_id: TrainerId,
        center_id: CenterId,
    ) -> Result<Option<TrainerSettings>, PayrollError>;

    /// Commission tiers configured for a center, in no particular order.
    async fn commission_rules(&self, center_id: CenterId) -> Result<Vec<CommissionRule>, PayrollError>;

    /// Session-price tiers configured for a center.
    async fn session_price_rules(
        &self,
        center_id: CenterId,
    ) -> Result<Vec<SessionPriceRule>, PayrollError>;

    /// The full member directory.
    async fn members(&self) -> Result<Vec<Member>, PayrollError>;
}

/// Errors that can occur while loading payroll inputs.
#[derive(Debug, thiserror::Error)]
pub enum PayrollError {
    #[error("Trainer not found: {0}")]
    TrainerNotFound(TrainerId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for PayrollError {
    fn from(err: sqlx::Error) -> Self {
        PayrollError::Database(err.to_string())
    }
}

impl From<ValidationError> for PayrollError {
    fn from(err: ValidationError) -> Self {
        PayrollError::InvalidInput(err.to_string())
    }
}
