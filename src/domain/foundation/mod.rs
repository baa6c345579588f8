//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, reporting windows and error types
//! that form the vocabulary of the payroll domain.

mod errors;
mod ids;
mod month;
mod percentage;
mod record_date;

pub use errors::ValidationError;
pub use ids::{CenterId, MemberId, MembershipId, PtSessionId, TrainerId};
pub use month::{DateWindow, ReportingMonth};
pub use percentage::Percentage;
pub use record_date::RecordDate;
