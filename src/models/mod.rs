//! Core data models for the payroll desk.

mod employee;

pub use employee::{EmployeeKind, EmployeeRecord};
