//! In-memory adapters for tests and local development.

mod member_directory;
mod payroll_reader;

pub use member_directory::CachedMemberDirectory;
pub use payroll_reader::InMemoryPayrollReader;
