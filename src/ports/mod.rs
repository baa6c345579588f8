//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PayrollReader` - Loads contracts, sessions, rules and settings for payroll
//! - `MemberDirectory` - Immutable member snapshots with explicit refetch

mod member_directory;
mod payroll_reader;

pub use member_directory::{MemberDirectory, MemberSnapshot};
pub use payroll_reader::{PayrollError, PayrollReader};
