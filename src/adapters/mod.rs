//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum routes over the payroll query handlers
//! - `memory` - in-memory reader and the cached member directory
//! - `postgres` - sqlx-backed reader

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{CachedMemberDirectory, InMemoryPayrollReader};
pub use postgres::PostgresPayrollReader;
