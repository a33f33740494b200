//! Menu-driven payroll record keeper.
//!
//! This crate keeps employee records in memory, computes salaries via
//! per-variant rules, and supports search, grouping, sorting, one-shot
//! report export, and rule-based promotion. The interactive console shell
//! lives in [`shell`]; everything it dispatches to is plain synchronous
//! library code.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod promotion;
pub mod report;
pub mod roster;
pub mod shell;
