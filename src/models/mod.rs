//! Core data models for the PAYE engine.
//!
//! This module contains all the domain models used throughout the engine.

mod history_entry;
mod payroll_result;
mod salary_input;

pub use history_entry::HistoryEntry;
pub use payroll_result::{BracketStep, PayrollResult};
pub use salary_input::{GrossPeriod, NssfContributionMode, SalaryInput};
