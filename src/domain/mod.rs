//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, reporting windows, errors)
//! - `payroll` - Contracts, sessions, commission rules and the monthly calculator

pub mod foundation;
pub mod payroll;
