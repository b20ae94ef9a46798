//! Net pay calculation.
//!
//! This module composes PAYE and NSSF into a full [`PayrollResult`].

use crate::config::TaxTable;
use crate::models::{PayrollResult, SalaryInput};

use super::nssf::compute_nssf_with;
use super::paye::{compute_paye_with, explain_paye_with};
use super::statutory_table;

/// Computes the full payroll breakdown for `input` under the statutory
/// tax table.
///
/// The function is total over non-negative inputs and deterministic: the
/// same input always yields an identical result.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::compute_payroll;
/// use paye_engine::models::{GrossPeriod, NssfContributionMode, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(500_000), GrossPeriod::Monthly)
///     .with_nssf_mode(NssfContributionMode::Both);
/// let result = compute_payroll(&input);
///
/// assert_eq!(result.paye, Decimal::from(52_000));
/// assert_eq!(result.total_deductions, Decimal::from(64_000));
/// assert_eq!(result.net_pay, Decimal::from(436_000));
/// ```
pub fn compute_payroll(input: &SalaryInput) -> PayrollResult {
    compute_payroll_with(statutory_table(), input)
}

/// Computes the full payroll breakdown for `input` under `table`.
pub fn compute_payroll_with(table: &TaxTable, input: &SalaryInput) -> PayrollResult {
    let monthly_gross = input.monthly_gross();
    let total_allowances = input.total_allowances();
    let taxable_income = monthly_gross.saturating_add(total_allowances);

    let paye = compute_paye_with(&table.paye, taxable_income);
    let nssf = compute_nssf_with(&table.nssf, monthly_gross, input.nssf_mode);

    // Sums saturate so amounts near Decimal::MAX cannot overflow.
    let total_deductions = paye
        .saturating_add(nssf.employee)
        .saturating_add(input.other_deductions);
    let net_pay = taxable_income.saturating_sub(total_deductions);
    let employer_cost = taxable_income.saturating_add(nssf.employer);

    PayrollResult {
        monthly_gross,
        total_allowances,
        taxable_income,
        paye,
        nssf_employee: nssf.employee,
        nssf_employer: nssf.employer,
        other_deductions: input.other_deductions,
        total_deductions,
        net_pay,
        employer_cost,
        paye_bracket_explanation: explain_paye_with(&table.paye, taxable_income),
    }
}
