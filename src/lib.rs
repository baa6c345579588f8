//! Studio Payroll - Revenue, commission and salary reporting for
//! personal-training studios.
//!
//! The calculator in `domain::payroll` is pure and synchronous. Handlers in
//! `application` gather its inputs through the `ports` traits, which the
//! `adapters` implement over PostgreSQL or in memory.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
