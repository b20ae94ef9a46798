//! NSSF contribution calculation functionality.
//!
//! This module splits National Social Security Fund contributions between
//! employee and employer according to the selected
//! [`NssfContributionMode`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NssfRates;
use crate::models::NssfContributionMode;

use super::statutory_table;

/// The employee and employer shares of an NSSF contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NssfContribution {
    /// Amount withheld from the employee's pay.
    pub employee: Decimal,
    /// Amount paid on top by the employer.
    pub employer: Decimal,
}

/// Computes NSSF contributions using the statutory rates.
///
/// The contribution base is the monthly gross capped at 240,000. The
/// employee pays 5% and the employer 10% of the base, each only when
/// `mode` selects that party. [`NssfContributionMode::None`] and
/// [`NssfContributionMode::Unrecognized`] yield zero for both.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::compute_nssf;
/// use paye_engine::models::NssfContributionMode;
/// use rust_decimal::Decimal;
///
/// let nssf = compute_nssf(Decimal::from(500_000), NssfContributionMode::Both);
/// assert_eq!(nssf.employee, Decimal::from(12_000));
/// assert_eq!(nssf.employer, Decimal::from(24_000));
/// ```
pub fn compute_nssf(monthly_gross: Decimal, mode: NssfContributionMode) -> NssfContribution {
    compute_nssf_with(&statutory_table().nssf, monthly_gross, mode)
}

/// Computes NSSF contributions using the given rates.
pub fn compute_nssf_with(
    rates: &NssfRates,
    monthly_gross: Decimal,
    mode: NssfContributionMode,
) -> NssfContribution {
    if mode == NssfContributionMode::Unrecognized {
        debug!("Unrecognized NSSF contribution mode, no contributions applied");
    }

    let base = monthly_gross.min(rates.cap).max(Decimal::ZERO);

    NssfContribution {
        employee: if mode.includes_employee() {
            base * rates.employee_rate
        } else {
            Decimal::ZERO
        },
        employer: if mode.includes_employer() {
            base * rates.employer_rate
        } else {
            Decimal::ZERO
        },
    }
}
