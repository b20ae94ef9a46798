//! Payroll result models for the PAYE engine.
//!
//! This module contains the [`PayrollResult`] type produced by
//! [`compute_payroll`](crate::calculation::compute_payroll) and the
//! [`BracketStep`] lines that explain how PAYE was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the PAYE bracket explanation.
///
/// # Example
///
/// ```
/// use paye_engine::models::BracketStep;
/// use rust_decimal::Decimal;
///
/// let step = BracketStep {
///     description: "First 410,000".to_string(),
///     amount: Decimal::from(25_000),
/// };
/// assert_eq!(step.amount, Decimal::from(25_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketStep {
    /// Human-readable description of the slice of income.
    pub description: String,
    /// The tax attributed to this slice.
    pub amount: Decimal,
}

/// The complete result of a net pay calculation.
///
/// Every field is derived from a [`SalaryInput`](super::SalaryInput); all
/// amounts are monthly Ugandan Shillings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Gross salary normalized to a month.
    pub monthly_gross: Decimal,
    /// Housing plus transport allowances.
    pub total_allowances: Decimal,
    /// Monthly gross plus allowances.
    pub taxable_income: Decimal,
    /// Pay As You Earn income tax.
    pub paye: Decimal,
    /// NSSF contribution withheld from the employee.
    pub nssf_employee: Decimal,
    /// NSSF contribution paid by the employer.
    pub nssf_employer: Decimal,
    /// Other deductions carried over from the input.
    pub other_deductions: Decimal,
    /// PAYE plus employee NSSF plus other deductions.
    pub total_deductions: Decimal,
    /// Take-home pay.
    pub net_pay: Decimal,
    /// The employer's all-in monthly cost.
    pub employer_cost: Decimal,
    /// Which PAYE brackets contributed how much.
    pub paye_bracket_explanation: Vec<BracketStep>,
}
