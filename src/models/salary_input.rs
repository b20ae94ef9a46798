//! Salary input model and related enums.
//!
//! This module defines the [`SalaryInput`] value handed to the engine along
//! with the [`GrossPeriod`] and [`NssfContributionMode`] selectors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The period the entered gross amount covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrossPeriod {
    /// The gross amount is a monthly salary.
    #[default]
    Monthly,
    /// The gross amount is an annual salary and is divided by 12.
    Annual,
}

impl GrossPeriod {
    /// Returns the number of months the gross amount covers.
    pub fn months(self) -> Decimal {
        match self {
            GrossPeriod::Monthly => Decimal::ONE,
            GrossPeriod::Annual => Decimal::from(12),
        }
    }
}

/// Which parties pay NSSF contributions.
///
/// Any serialized value that is not one of the known modes deserializes to
/// [`NssfContributionMode::Unrecognized`], which contributes nothing.
///
/// # Example
///
/// ```
/// use paye_engine::models::NssfContributionMode;
///
/// let mode: NssfContributionMode = serde_json::from_str("\"both\"").unwrap();
/// assert_eq!(mode, NssfContributionMode::Both);
///
/// let mode: NssfContributionMode = serde_json::from_str("\"pension\"").unwrap();
/// assert_eq!(mode, NssfContributionMode::Unrecognized);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NssfContributionMode {
    /// Only the employee contributes.
    #[serde(alias = "employee")]
    EmployeeOnly,
    /// Only the employer contributes.
    #[serde(alias = "employer")]
    EmployerOnly,
    /// Both employee and employer contribute.
    Both,
    /// Nobody contributes.
    #[default]
    None,
    /// A mode this engine does not know about.
    #[serde(other)]
    Unrecognized,
}

impl NssfContributionMode {
    /// Returns true if the employee pays a share under this mode.
    pub fn includes_employee(self) -> bool {
        matches!(
            self,
            NssfContributionMode::EmployeeOnly | NssfContributionMode::Both
        )
    }

    /// Returns true if the employer pays a share under this mode.
    pub fn includes_employer(self) -> bool {
        matches!(
            self,
            NssfContributionMode::EmployerOnly | NssfContributionMode::Both
        )
    }
}

/// The inputs for a single net pay calculation.
///
/// All monetary amounts are in Ugandan Shillings and must be non-negative;
/// callers are responsible for clamping user entries before construction.
/// Allowances and other deductions are monthly amounts regardless of
/// [`GrossPeriod`].
///
/// # Example
///
/// ```
/// use paye_engine::models::{GrossPeriod, NssfContributionMode, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(6_000_000), GrossPeriod::Annual)
///     .with_nssf_mode(NssfContributionMode::Both);
/// assert_eq!(input.monthly_gross(), Decimal::from(500_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// The gross salary for `gross_period`.
    pub gross_amount: Decimal,
    /// Whether `gross_amount` is monthly or annual.
    #[serde(default)]
    pub gross_period: GrossPeriod,
    /// Monthly housing allowance.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Monthly transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Monthly deductions applied after PAYE and NSSF.
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Which parties contribute to NSSF.
    #[serde(default)]
    pub nssf_mode: NssfContributionMode,
}

impl SalaryInput {
    /// Creates an input with the given gross and no allowances, deductions
    /// or NSSF contributions.
    pub fn new(gross_amount: Decimal, gross_period: GrossPeriod) -> Self {
        Self {
            gross_amount,
            gross_period,
            ..Default::default()
        }
    }

    /// Sets the monthly housing allowance.
    pub fn with_housing_allowance(mut self, amount: Decimal) -> Self {
        self.housing_allowance = amount;
        self
    }

    /// Sets the monthly transport allowance.
    pub fn with_transport_allowance(mut self, amount: Decimal) -> Self {
        self.transport_allowance = amount;
        self
    }

    /// Sets the monthly other deductions.
    pub fn with_other_deductions(mut self, amount: Decimal) -> Self {
        self.other_deductions = amount;
        self
    }

    /// Sets the NSSF contribution mode.
    pub fn with_nssf_mode(mut self, mode: NssfContributionMode) -> Self {
        self.nssf_mode = mode;
        self
    }

    /// Returns the gross amount normalized to a monthly figure.
    pub fn monthly_gross(&self) -> Decimal {
        self.gross_amount / self.gross_period.months()
    }

    /// Returns the sum of the housing and transport allowances, saturating
    /// at `Decimal::MAX`.
    pub fn total_allowances(&self) -> Decimal {
        self.housing_allowance.saturating_add(self.transport_allowance)
    }
}
