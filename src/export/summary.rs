//! Plain-text net pay summary.

use crate::format::format_ugx;
use crate::models::PayrollResult;

/// Title line of the summary document.
pub const SUMMARY_TITLE: &str = "Uganda Net Pay Summary";

/// Renders a result as a printable summary document.
///
/// The document lists the headline figures followed by the PAYE bracket
/// breakdown, one line per bracket step.
///
/// # Example
///
/// ```
/// use paye_engine::calculation::compute_payroll;
/// use paye_engine::export::render_summary;
/// use paye_engine::models::{GrossPeriod, NssfContributionMode, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(500_000), GrossPeriod::Monthly)
///     .with_nssf_mode(NssfContributionMode::Both);
/// let summary = render_summary(&compute_payroll(&input));
/// assert!(summary.contains("Net Pay: 436,000.00 UGX"));
/// ```
pub fn render_summary(result: &PayrollResult) -> String {
    let figures = [
        ("Net Pay", result.net_pay),
        ("PAYE", result.paye),
        ("NSSF (Employee)", result.nssf_employee),
        ("NSSF (Employer)", result.nssf_employer),
        ("Total Deductions", result.total_deductions),
        ("Employer Total Cost", result.employer_cost),
    ];

    let mut lines = vec![SUMMARY_TITLE.to_string(), String::new()];
    lines.extend(
        figures
            .iter()
            .map(|(label, amount)| format!("{}: {} UGX", label, format_ugx(*amount))),
    );
    lines.push(String::new());
    lines.push("PAYE Breakdown:".to_string());
    if result.paye_bracket_explanation.is_empty() {
        lines.push("- No PAYE due".to_string());
    }
    lines.extend(
        result
            .paye_bracket_explanation
            .iter()
            .map(|step| format!("- {}: UGX {}", step.description, format_ugx(step.amount))),
    );

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_payroll;
    use crate::models::{GrossPeriod, NssfContributionMode, SalaryInput};
    use rust_decimal::Decimal;

    fn summary_for(gross: i64, mode: NssfContributionMode) -> String {
        let input = SalaryInput::new(Decimal::from(gross), GrossPeriod::Monthly).with_nssf_mode(mode);
        render_summary(&compute_payroll(&input))
    }

    #[test]
    fn test_summary_lists_headline_figures_in_order() {
        let summary = summary_for(500_000, NssfContributionMode::Both);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "Uganda Net Pay Summary");
        assert_eq!(lines[2], "Net Pay: 436,000.00 UGX");
        assert_eq!(lines[3], "PAYE: 52,000.00 UGX");
        assert_eq!(lines[4], "NSSF (Employee): 12,000.00 UGX");
        assert_eq!(lines[5], "NSSF (Employer): 24,000.00 UGX");
        assert_eq!(lines[6], "Total Deductions: 64,000.00 UGX");
        assert_eq!(lines[7], "Employer Total Cost: 524,000.00 UGX");
    }

    #[test]
    fn test_summary_includes_bracket_breakdown() {
        let summary = summary_for(500_000, NssfContributionMode::Both);

        assert!(summary.contains("PAYE Breakdown:"));
        assert!(summary.contains("- First 410,000: UGX 25,000.00"));
        assert!(summary.contains("- Remaining 90,000 @ 30%: UGX 27,000.00"));
    }

    #[test]
    fn test_summary_notes_when_no_paye_is_due() {
        let summary = summary_for(200_000, NssfContributionMode::EmployeeOnly);

        assert!(summary.contains("PAYE: 0.00 UGX"));
        assert!(summary.contains("- No PAYE due"));
    }
    #[test]
    fn test_summary_ends_with_single_newline() {
        let summary = summary_for(500_000, NssfContributionMode::Both);

        assert!(summary.ends_with("UGX 27,000.00\n"));
        assert!(!summary.ends_with("\n\n"));
        assert_eq!(summary.lines().nth(1), Some(""));
        assert_eq!(summary.lines().nth(8), Some(""));
        assert_eq!(summary.lines().nth(9), Some("PAYE Breakdown:"));
    }
}
