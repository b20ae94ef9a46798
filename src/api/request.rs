//! Request types for the PAYE engine API.
//!
//! Form fields arrive loosely typed: amounts may be numbers, numeric
//! strings, empty strings or missing. This module normalizes them into a
//! [`SalaryInput`], treating anything unusable as zero and clamping
//! negative amounts to zero. The mode and period fields are just as loose:
//! a value of the wrong JSON type falls back instead of rejecting the body.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{GrossPeriod, NssfContributionMode, SalaryInput};

/// Largest accepted amount (one quadrillion shillings). Anything above is
/// replaced by zero.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Request body for the `/calculate` and `/summary` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross salary for `gross_period`.
    #[serde(default)]
    pub gross_amount: Option<Value>,
    /// `"monthly"` or `"annual"`; anything else is treated as monthly.
    #[serde(default)]
    pub gross_period: Option<Value>,
    /// Monthly housing allowance.
    #[serde(default)]
    pub housing_allowance: Option<Value>,
    /// Monthly transport allowance.
    #[serde(default)]
    pub transport_allowance: Option<Value>,
    /// Monthly other deductions.
    #[serde(default)]
    pub other_deductions: Option<Value>,
    /// NSSF contribution mode; unknown values contribute nothing.
    #[serde(default)]
    pub nssf_mode: Option<Value>,
}

/// A note about a field that was adjusted during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputWarning {
    /// The request field that was adjusted.
    pub field: String,
    /// What was done to it.
    pub message: String,
}

impl CalculationRequest {
    /// Converts the request into a [`SalaryInput`], returning a warning for
    /// every field that was not a usable non-negative amount.
    pub fn into_input(self) -> (SalaryInput, Vec<InputWarning>) {
        let mut warnings = Vec::new();
        let mut amount = |field: &str, value: Option<Value>| {
            normalize_amount(field, value.as_ref(), &mut warnings)
        };

        let gross_amount = amount("gross_amount", self.gross_amount);
        let housing_allowance = amount("housing_allowance", self.housing_allowance);
        let transport_allowance = amount("transport_allowance", self.transport_allowance);
        let other_deductions = amount("other_deductions", self.other_deductions);

        let gross_period = normalize_period(self.gross_period.as_ref(), &mut warnings);
        let nssf_mode = normalize_mode(self.nssf_mode, &mut warnings);

        let input = SalaryInput {
            gross_amount,
            gross_period,
            housing_allowance,
            transport_allowance,
            other_deductions,
            nssf_mode,
        };
        (input, warnings)
    }
}

fn normalize_amount(field: &str, value: Option<&Value>, warnings: &mut Vec<InputWarning>) -> Decimal {
    let parsed = match value {
        None | Some(Value::Null) => Some(Decimal::ZERO),
        Some(Value::String(text)) if text.trim().is_empty() => Some(Decimal::ZERO),
        Some(Value::String(text)) => parse_decimal(text.trim()),
        Some(Value::Number(number)) => parse_decimal(&number.to_string()),
        Some(_) => None,
    };

    match parsed {
        Some(amount) if amount > MAX_AMOUNT => {
            warnings.push(InputWarning {
                field: field.to_string(),
                message: "Amount too large, using 0".to_string(),
            });
            Decimal::ZERO
        }
        Some(amount) if amount < Decimal::ZERO => {
            warnings.push(InputWarning {
                field: field.to_string(),
                message: "Negative values not allowed, using 0".to_string(),
            });
            Decimal::ZERO
        }
        Some(amount) => amount,
        None => {
            warnings.push(InputWarning {
                field: field.to_string(),
                message: "Not a number, using 0".to_string(),
            });
            Decimal::ZERO
        }
    }
}

fn normalize_period(value: Option<&Value>, warnings: &mut Vec<InputWarning>) -> GrossPeriod {
    match value {
        Some(Value::String(period)) if period.trim().eq_ignore_ascii_case("annual") => {
            GrossPeriod::Annual
        }
        None | Some(Value::Null) | Some(Value::String(_)) => GrossPeriod::Monthly,
        Some(_) => {
            warnings.push(InputWarning {
                field: "gross_period".to_string(),
                message: "Not a period name, using monthly".to_string(),
            });
            GrossPeriod::Monthly
        }
    }
}

fn normalize_mode(value: Option<Value>, warnings: &mut Vec<InputWarning>) -> NssfContributionMode {
    match value {
        None | Some(Value::Null) => NssfContributionMode::default(),
        Some(mode @ Value::String(_)) => {
            serde_json::from_value(mode).unwrap_or(NssfContributionMode::Unrecognized)
        }
        Some(_) => {
            warnings.push(InputWarning {
                field: "nssf_mode".to_string(),
                message: "Not a contribution mode, no NSSF applied".to_string(),
            });
            NssfContributionMode::Unrecognized
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn request(value: Value) -> CalculationRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numbers_and_numeric_strings_are_accepted() {
        let (input, warnings) = request(json!({
            "gross_amount": 500000,
            "housing_allowance": "25000.50",
            "transport_allowance": 1.5e4,
            "nssf_mode": "both"
        }))
        .into_input();

        assert!(warnings.is_empty());
        assert_eq!(input.gross_amount, dec("500000"));
        assert_eq!(input.housing_allowance, dec("25000.50"));
        assert_eq!(input.transport_allowance, dec("15000"));
        assert_eq!(input.nssf_mode, NssfContributionMode::Both);
    }

    #[test]
    fn test_missing_and_empty_fields_are_zero_without_warning() {
        let (input, warnings) = request(json!({
            "gross_amount": "",
            "other_deductions": null
        }))
        .into_input();

        assert!(warnings.is_empty());
        assert_eq!(input, SalaryInput::default());
    }

    #[test]
    fn test_non_numeric_is_zero_with_warning() {
        let (input, warnings) = request(json!({
            "gross_amount": "lots",
            "housing_allowance": [1, 2]
        }))
        .into_input();

        assert_eq!(input.gross_amount, Decimal::ZERO);
        assert_eq!(input.housing_allowance, Decimal::ZERO);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].field, "gross_amount");
        assert_eq!(warnings[1].field, "housing_allowance");
    }

    #[test]
    fn test_negative_amounts_are_clamped_with_warning() {
        let (input, warnings) = request(json!({
            "gross_amount": 300000,
            "other_deductions": -5000
        }))
        .into_input();

        assert_eq!(input.other_deductions, Decimal::ZERO);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "other_deductions");
        assert!(warnings[0].message.contains("Negative"));
    }

    #[test]
    fn test_gross_period_annual_is_case_insensitive() {
        let (input, _) = request(json!({ "gross_amount": 6000000, "gross_period": "Annual" }))
            .into_input();
        assert_eq!(input.gross_period, GrossPeriod::Annual);

        let (input, _) = request(json!({ "gross_amount": 1, "gross_period": "weekly" }))
            .into_input();
        assert_eq!(input.gross_period, GrossPeriod::Monthly);
    }

    #[test]
    fn test_unknown_nssf_mode_is_unrecognized() {
        let (input, _) = request(json!({ "nssf_mode": "voluntary" })).into_input();
        assert_eq!(input.nssf_mode, NssfContributionMode::Unrecognized);
    }

    #[test]
    fn test_missing_nssf_mode_defaults_to_none() {
        let (input, _) = request(json!({ "gross_amount": 1 })).into_input();
        assert_eq!(input.nssf_mode, NssfContributionMode::None);
    }
    #[test]
    fn test_amount_above_maximum_is_zero_with_warning() {
        let (input, warnings) = request(json!({
            "gross_amount": "79228162514264337593543950335",
            "housing_allowance": "1000000000000000",
            "nssf_mode": "both"
        }))
        .into_input();

        assert_eq!(input.gross_amount, Decimal::ZERO);
        assert_eq!(input.housing_allowance, MAX_AMOUNT);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "gross_amount");
        assert!(warnings[0].message.contains("too large"));
    }

    #[test]
    fn test_non_string_nssf_mode_is_unrecognized_with_warning() {
        for mode in [json!(5), json!(true), json!({ "kind": "both" })] {
            let (input, warnings) =
                request(json!({ "gross_amount": 500000, "nssf_mode": mode })).into_input();

            assert_eq!(input.nssf_mode, NssfContributionMode::Unrecognized);
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].field, "nssf_mode");
        }
    }

    #[test]
    fn test_non_string_gross_period_is_monthly_with_warning() {
        let (input, warnings) =
            request(json!({ "gross_amount": 500000, "gross_period": 12 })).into_input();

        assert_eq!(input.gross_period, GrossPeriod::Monthly);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "gross_period");
    }

    #[test]
    fn test_null_mode_and_period_use_defaults_without_warning() {
        let (input, warnings) = request(json!({
            "gross_amount": 1,
            "gross_period": null,
            "nssf_mode": null
        }))
        .into_input();

        assert!(warnings.is_empty());
        assert_eq!(input.gross_period, GrossPeriod::Monthly);
        assert_eq!(input.nssf_mode, NssfContributionMode::None);
    }
}
