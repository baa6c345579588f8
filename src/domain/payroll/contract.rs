//! PT membership contracts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, MembershipId, Percentage, RecordDate, TrainerId};

/// How a contract came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationType {
    /// First package bought by the member.
    New,
    /// Follow-up package for an existing member.
    Renewal,
}

impl RegistrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationType::New => "new",
            RegistrationType::Renewal => "renewal",
        }
    }
}

/// How the contract was paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
    Transfer,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Other => "other",
        }
    }
}

/// A block of PT sessions purchased by a member from a trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipContract {
    pub id: MembershipId,
    pub member_id: MemberId,
    pub trainer_id: TrainerId,
    /// Date the contract was signed; places the sale in a month.
    pub contract_date: RecordDate,
    /// Date the first session may be taken.
    pub start_date: RecordDate,
    pub total_sessions: u32,
    pub remaining_sessions: u32,
    pub session_price: f64,
    /// Per-contract commission override. `None` means the monthly tier applies.
    #[serde(default)]
    pub commission_rate: Option<Percentage>,
    pub registration_type: RegistrationType,
    pub payment_method: PaymentMethod,
}

impl MembershipContract {
    /// Face value of the contract: `total_sessions x session_price`.
    pub fn contract_amount(&self) -> f64 {
        f64::from(self.total_sessions) * self.session_price
    }

    pub fn used_sessions(&self) -> u32 {
        self.total_sessions.saturating_sub(self.remaining_sessions)
    }
}
