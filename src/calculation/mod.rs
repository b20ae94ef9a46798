//! Calculation logic for the PAYE engine.
//!
//! This module contains the pure calculation functions: progressive PAYE
//! on taxable income, the capped NSSF split between employee and employer,
//! and their composition into a net pay breakdown. None of these functions
//! perform I/O or hold state; each call is independent.

use std::sync::LazyLock;

use crate::config::TaxTable;

mod nssf;
mod paye;
mod payroll;

pub use nssf::{NssfContribution, compute_nssf, compute_nssf_with};
pub use paye::{compute_paye, compute_paye_with, explain_paye, explain_paye_with};
pub use payroll::{compute_payroll, compute_payroll_with};

static STATUTORY_TABLE: LazyLock<TaxTable> = LazyLock::new(TaxTable::uganda);

/// Returns the shared statutory tax table.
pub(crate) fn statutory_table() -> &'static TaxTable {
    &STATUTORY_TABLE
}
