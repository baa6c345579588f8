//! PostgreSQL adapters - Database implementations for the read ports.

mod payroll_reader;

pub use payroll_reader::PostgresPayrollReader;
