//! Property tests for the PAYE and NSSF calculations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use paye_engine::calculation::{compute_nssf, compute_paye, compute_payroll};
use paye_engine::models::{GrossPeriod, NssfContributionMode, SalaryInput};

/// Whole-shilling amounts up to 100 million.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000).prop_map(Decimal::from)
}

fn nssf_mode() -> impl Strategy<Value = NssfContributionMode> {
    prop_oneof![
        Just(NssfContributionMode::EmployeeOnly),
        Just(NssfContributionMode::EmployerOnly),
        Just(NssfContributionMode::Both),
        Just(NssfContributionMode::None),
        Just(NssfContributionMode::Unrecognized),
    ]
}

fn salary_input() -> impl Strategy<Value = SalaryInput> {
    (
        amount(),
        prop_oneof![Just(GrossPeriod::Monthly), Just(GrossPeriod::Annual)],
        amount(),
        amount(),
        amount(),
        nssf_mode(),
    )
        .prop_map(|(gross, period, housing, transport, other, mode)| {
            SalaryInput::new(gross, period)
                .with_housing_allowance(housing)
                .with_transport_allowance(transport)
                .with_other_deductions(other)
                .with_nssf_mode(mode)
        })
}

proptest! {
    #[test]
    fn paye_is_monotonic(a in amount(), b in amount()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_paye(low) <= compute_paye(high));
    }

    #[test]
    fn paye_is_zero_up_to_threshold(income in 0i64..=235_000) {
        prop_assert_eq!(compute_paye(Decimal::from(income)), Decimal::ZERO);
    }

    #[test]
    fn paye_never_exceeds_income(income in amount()) {
        let paye = compute_paye(income);
        prop_assert!(paye >= Decimal::ZERO);
        prop_assert!(paye <= income);
    }

    #[test]
    fn nssf_never_exceeds_capped_rate(gross in amount(), mode in nssf_mode()) {
        let nssf = compute_nssf(gross, mode);
        prop_assert!(nssf.employee <= Decimal::from(12_000));
        prop_assert!(nssf.employer <= Decimal::from(24_000));
    }

    #[test]
    fn nssf_none_contributes_nothing(gross in amount()) {
        let nssf = compute_nssf(gross, NssfContributionMode::None);
        prop_assert_eq!(nssf.employee, Decimal::ZERO);
        prop_assert_eq!(nssf.employer, Decimal::ZERO);
    }

    #[test]
    fn net_pay_identity_holds(input in salary_input()) {
        let result = compute_payroll(&input);
        prop_assert_eq!(
            result.net_pay,
            result.monthly_gross + result.total_allowances - result.total_deductions
        );
        prop_assert_eq!(
            result.total_deductions,
            result.paye + result.nssf_employee + result.other_deductions
        );
        prop_assert_eq!(
            result.employer_cost,
            result.monthly_gross + result.total_allowances + result.nssf_employer
        );
    }

    #[test]
    fn explanation_sums_to_paye(input in salary_input()) {
        let result = compute_payroll(&input);
        let explained: Decimal = result
            .paye_bracket_explanation
            .iter()
            .map(|step| step.amount)
            .sum();
        prop_assert_eq!(explained, result.paye);
    }

    #[test]
    fn payroll_is_deterministic(input in salary_input()) {
        prop_assert_eq!(compute_payroll(&input), compute_payroll(&input));
    }
}
