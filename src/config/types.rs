//! Configuration types for PAYE and NSSF.
//!
//! This module contains the strongly-typed tax table structures that are
//! deserialized from YAML, together with the built-in statutory table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single PAYE band.
///
/// Income inside the band is taxed at `base_tax + rate * (income - lower)`.
/// The upper bound is inclusive; the last band is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeBand {
    /// The exclusive lower bound of the band.
    pub lower: Decimal,
    /// The inclusive upper bound, or `None` for the top band.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// The marginal rate applied above `lower` (e.g. 0.30 for 30%).
    pub rate: Decimal,
    /// Total tax owed on all income up to `lower`.
    pub base_tax: Decimal,
}

impl PayeBand {
    /// Returns true if `income` falls inside this band.
    pub fn contains(&self, income: Decimal) -> bool {
        self.upper.is_none_or(|upper| income <= upper)
    }

    /// Returns true if the band contributes no tax at all.
    pub fn is_tax_free(&self) -> bool {
        self.rate.is_zero() && self.base_tax.is_zero()
    }
}

/// A progressive PAYE schedule over monthly taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeSchedule {
    /// Bands ordered from lowest to highest income.
    pub bands: Vec<PayeBand>,
}

impl PayeSchedule {
    /// Returns the band `income` falls into, if any.
    ///
    /// Non-positive income falls into the first band.
    pub fn band_for(&self, income: Decimal) -> Option<&PayeBand> {
        self.bands.iter().find(|band| band.contains(income))
    }

    /// Checks that bands start at zero, are contiguous, and join without a
    /// jump in tax at each boundary.
    pub fn validate(&self) -> EngineResult<()> {
        let first = self.bands.first().ok_or_else(|| invalid("PAYE schedule has no bands"))?;
        if !first.lower.is_zero() {
            return Err(invalid("first PAYE band must start at 0"));
        }

        for (index, band) in self.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(invalid(format!("band {} rate {} is outside 0..=1", index, band.rate)));
            }
            if band.base_tax < Decimal::ZERO {
                return Err(invalid(format!("band {} has negative base tax", index)));
            }

            let is_last = index + 1 == self.bands.len();
            match band.upper {
                Some(upper) if upper <= band.lower => {
                    return Err(invalid(format!(
                        "band {} upper bound {} is not above lower bound {}",
                        index, upper, band.lower
                    )));
                }
                None if !is_last => {
                    return Err(invalid(format!("band {} is open-ended but not last", index)));
                }
                Some(_) if is_last => {
                    return Err(invalid("top PAYE band must be open-ended"));
                }
                _ => {}
            }

            if let (Some(next), Some(upper)) = (self.bands.get(index + 1), band.upper) {
                if next.lower != upper {
                    return Err(invalid(format!(
                        "band {} starts at {} but band {} ends at {}",
                        index + 1,
                        next.lower,
                        index,
                        upper
                    )));
                }
                let tax_at_boundary = band.base_tax + band.rate * (upper - band.lower);
                if next.base_tax != tax_at_boundary {
                    return Err(invalid(format!(
                        "band {} base tax {} does not match {} owed at {}",
                        index + 1,
                        next.base_tax,
                        tax_at_boundary,
                        upper
                    )));
                }
            }
        }

        Ok(())
    }
}

/// NSSF contribution rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NssfRates {
    /// Monthly gross above which no further contributions accrue.
    pub cap: Decimal,
    /// Employee share of the capped gross (e.g. 0.05).
    pub employee_rate: Decimal,
    /// Employer share of the capped gross (e.g. 0.10).
    pub employer_rate: Decimal,
}

impl NssfRates {
    /// Checks that the cap and both rates are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.cap < Decimal::ZERO {
            return Err(invalid("NSSF cap must not be negative"));
        }
        if self.employee_rate < Decimal::ZERO || self.employer_rate < Decimal::ZERO {
            return Err(invalid("NSSF rates must not be negative"));
        }
        Ok(())
    }
}

/// The complete tax table used by the engine.
///
/// # Example
///
/// ```
/// use paye_engine::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::uganda();
/// assert_eq!(table.paye.bands.len(), 4);
/// assert_eq!(table.nssf.cap, Decimal::from(240_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    /// The PAYE schedule.
    pub paye: PayeSchedule,
    /// The NSSF rates.
    pub nssf: NssfRates,
}

impl TaxTable {
    /// Returns the statutory Ugandan monthly PAYE schedule and NSSF rates.
    pub fn uganda() -> Self {
        Self {
            paye: PayeSchedule {
                bands: vec![
                    PayeBand {
                        lower: Decimal::ZERO,
                        upper: Some(Decimal::from(235_000)),
                        rate: Decimal::ZERO,
                        base_tax: Decimal::ZERO,
                    },
                    PayeBand {
                        lower: Decimal::from(235_000),
                        upper: Some(Decimal::from(335_000)),
                        rate: Decimal::new(10, 2),
                        base_tax: Decimal::ZERO,
                    },
                    PayeBand {
                        lower: Decimal::from(335_000),
                        upper: Some(Decimal::from(410_000)),
                        rate: Decimal::new(20, 2),
                        base_tax: Decimal::from(10_000),
                    },
                    PayeBand {
                        lower: Decimal::from(410_000),
                        upper: None,
                        rate: Decimal::new(30, 2),
                        base_tax: Decimal::from(25_000),
                    },
                ],
            },
            nssf: NssfRates {
                cap: Decimal::from(240_000),
                employee_rate: Decimal::new(5, 2),
                employer_rate: Decimal::new(10, 2),
            },
        }
    }

    /// Validates both the PAYE schedule and the NSSF rates.
    pub fn validate(&self) -> EngineResult<()> {
        self.paye.validate()?;
        self.nssf.validate()
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::uganda()
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidTaxTable {
        message: message.into(),
    }
}
