//! Deduction breakdown chart data.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::PayrollResult;

/// One slice of the deduction breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// Legend label for the slice.
    pub label: String,
    /// The deduction amount.
    pub amount: Decimal,
    /// Share of total deductions as a percentage, to two decimal places.
    pub share_percent: Decimal,
}

/// The three-slice proportion chart of employee deductions: PAYE, the
/// employee's NSSF contribution and other deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionChart {
    /// Chart title.
    pub title: String,
    /// The slices, always in PAYE, NSSF, other order.
    pub slices: Vec<ChartSlice>,
}

impl DeductionChart {
    /// Builds the chart for a calculation result.
    ///
    /// When there are no deductions at all every share is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use paye_engine::calculation::compute_payroll;
    /// use paye_engine::export::DeductionChart;
    /// use paye_engine::models::{GrossPeriod, NssfContributionMode, SalaryInput};
    /// use rust_decimal::Decimal;
    ///
    /// let input = SalaryInput::new(Decimal::from(500_000), GrossPeriod::Monthly)
    ///     .with_nssf_mode(NssfContributionMode::Both);
    /// let chart = DeductionChart::from_result(&compute_payroll(&input));
    /// assert_eq!(chart.slices[0].label, "PAYE");
    /// assert_eq!(chart.slices[0].share_percent, Decimal::new(8125, 2));
    /// ```
    pub fn from_result(result: &PayrollResult) -> Self {
        let parts = [
            ("PAYE", result.paye),
            ("NSSF (Employee)", result.nssf_employee),
            ("Other Deductions", result.other_deductions),
        ];
        let total: Decimal = parts.iter().map(|(_, amount)| *amount).sum();

        let slices = parts
            .into_iter()
            .map(|(label, amount)| ChartSlice {
                label: label.to_string(),
                amount,
                share_percent: share_of(amount, total),
            })
            .collect();

        Self {
            title: "Deduction Breakdown".to_string(),
            slices,
        }
    }
}

fn share_of(amount: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (amount * Decimal::ONE_HUNDRED / total)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_payroll;
    use crate::models::{GrossPeriod, NssfContributionMode, SalaryInput};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_slices_follow_result_amounts() {
        let input = SalaryInput::new(dec("500000"), GrossPeriod::Monthly)
            .with_other_deductions(dec("16000"))
            .with_nssf_mode(NssfContributionMode::Both);
        let chart = DeductionChart::from_result(&compute_payroll(&input));

        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["PAYE", "NSSF (Employee)", "Other Deductions"]);

        // 52,000 + 12,000 + 16,000 = 80,000
        assert_eq!(chart.slices[0].amount, dec("52000"));
        assert_eq!(chart.slices[0].share_percent, dec("65"));
        assert_eq!(chart.slices[1].share_percent, dec("15"));
        assert_eq!(chart.slices[2].share_percent, dec("20"));
    }

    #[test]
    fn test_employer_nssf_is_not_a_slice() {
        let input = SalaryInput::new(dec("500000"), GrossPeriod::Monthly)
            .with_nssf_mode(NssfContributionMode::EmployerOnly);
        let chart = DeductionChart::from_result(&compute_payroll(&input));

        assert_eq!(chart.slices[1].amount, Decimal::ZERO);
        assert_eq!(chart.slices[0].share_percent, dec("100"));
    }

    #[test]
    fn test_no_deductions_gives_zero_shares() {
        let chart = DeductionChart::from_result(&compute_payroll(&SalaryInput::default()));

        assert!(chart.slices.iter().all(|s| s.share_percent.is_zero()));
        assert_eq!(chart.title, "Deduction Breakdown");
    }

    #[test]
    fn test_shares_are_rounded_to_two_places() {
        let input = SalaryInput::new(dec("300000"), GrossPeriod::Monthly)
            .with_other_deductions(dec("10000"))
            .with_nssf_mode(NssfContributionMode::EmployeeOnly);
        let chart = DeductionChart::from_result(&compute_payroll(&input));

        // 6,500 + 12,000 + 10,000 = 28,500
        assert_eq!(chart.slices[0].share_percent, dec("22.81"));
        assert_eq!(chart.slices[1].share_percent, dec("42.11"));
        assert_eq!(chart.slices[2].share_percent, dec("35.09"));
    }
}
