//! PAYE calculation functionality.
//!
//! This module computes Pay As You Earn income tax on monthly taxable
//! income using a progressive [`PayeSchedule`], and builds the
//! human-readable explanation of how the figure was reached.

use rust_decimal::Decimal;

use crate::config::PayeSchedule;
use crate::format::group_thousands;
use crate::models::BracketStep;

use super::statutory_table;

/// Computes PAYE on monthly taxable income using the statutory schedule.
///
/// | Taxable income        | Tax                              |
/// |-----------------------|----------------------------------|
/// | up to 235,000         | 0                                |
/// | 235,000 to 335,000    | 10% of the excess over 235,000   |
/// | 335,000 to 410,000    | 10,000 + 20% of the excess       |
/// | above 410,000         | 25,000 + 30% of the excess       |
///
/// Upper bounds are inclusive. Zero or negative income yields zero.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::compute_paye;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_paye(Decimal::from(235_000)), Decimal::ZERO);
/// assert_eq!(compute_paye(Decimal::from(335_000)), Decimal::from(10_000));
/// assert_eq!(compute_paye(Decimal::from(500_000)), Decimal::from(52_000));
/// ```
pub fn compute_paye(taxable_income: Decimal) -> Decimal {
    compute_paye_with(&statutory_table().paye, taxable_income)
}

/// Computes PAYE on monthly taxable income using the given schedule.
///
/// The schedule is expected to have passed [`PayeSchedule::validate`];
/// income beyond a closed top band yields zero.
pub fn compute_paye_with(schedule: &PayeSchedule, taxable_income: Decimal) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match schedule.band_for(taxable_income) {
        Some(band) => band.base_tax + band.rate * (taxable_income - band.lower),
        None => Decimal::ZERO,
    }
}

/// Explains the statutory PAYE on `taxable_income`, bracket by bracket.
///
/// Returns an empty sequence when the income falls in the tax-free band.
/// Otherwise the first step is the fixed tax owed up to the band's lower
/// bound and the second is the marginal tax on the remainder; the step
/// amounts always sum to [`compute_paye`].
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::explain_paye;
/// use rust_decimal::Decimal;
///
/// let steps = explain_paye(Decimal::from(500_000));
/// assert_eq!(steps[0].description, "First 410,000");
/// assert_eq!(steps[1].description, "Remaining 90,000 @ 30%");
/// assert_eq!(steps[1].amount, Decimal::from(27_000));
/// ```
pub fn explain_paye(taxable_income: Decimal) -> Vec<BracketStep> {
    explain_paye_with(&statutory_table().paye, taxable_income)
}

/// Explains PAYE on `taxable_income` under the given schedule.
pub fn explain_paye_with(schedule: &PayeSchedule, taxable_income: Decimal) -> Vec<BracketStep> {
    if taxable_income <= Decimal::ZERO {
        return Vec::new();
    }

    let Some(band) = schedule.band_for(taxable_income) else {
        return Vec::new();
    };
    if band.is_tax_free() {
        return Vec::new();
    }

    let remaining = taxable_income - band.lower;
    let percent = band.rate * Decimal::ONE_HUNDRED;

    vec![
        BracketStep {
            description: format!("First {}", group_thousands(band.lower)),
            amount: band.base_tax,
        },
        BracketStep {
            description: format!(
                "Remaining {} @ {}%",
                group_thousands(remaining),
                percent.normalize()
            ),
            amount: band.rate * remaining,
        },
    ]
}
