// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Entry validation: raw form text in, typed records out.
//!
//! Nothing here touches session state. A rejected submission produces no
//! partial record.

use crate::error::ValidationError;
use crate::models::{Profile, TransactionKind, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a decimal the way the forms accept it: surrounding whitespace is
/// ignored, a leading sign and scientific notation are allowed.
///
/// The value must fit a [`Decimal`] exactly. Input that would overflow, or
/// that needs more than 28 fractional digits, is rejected rather than
/// rounded.
pub fn parse_decimal(field: &'static str, text: &str) -> Result<Decimal, ValidationError> {
    let s = text.trim();
    let not_a_number = || ValidationError::NotANumber {
        field,
        input: text.to_string(),
    };
    // rust_decimal tolerates digit separators, the forms do not
    if s.is_empty() || s.contains('_') {
        return Err(not_a_number());
    }
    let parsed = if s.contains(['e', 'E']) {
        Decimal::from_scientific(s)
    } else {
        Decimal::from_str(s)
    }
    .map_err(|_| not_a_number())?;

    match significand_of_text(s) {
        Some(exact) if exact == significand_of(&parsed) => Ok(parsed),
        _ => Err(not_a_number()),
    }
}

/// Significant digits and power of ten of already-validated decimal text,
/// with no leading or trailing zeros in the digits.
fn significand_of_text(s: &str) -> Option<(String, i64)> {
    let unsigned = s.trim_start_matches(['+', '-']);
    let (mantissa, exp) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let frac_len = i64::try_from(frac.len()).ok()?;
    Some(strip_zeros(format!("{int}{frac}"), exp.checked_sub(frac_len)?))
}

fn significand_of(d: &Decimal) -> (String, i64) {
    strip_zeros(
        d.mantissa().unsigned_abs().to_string(),
        -i64::from(d.scale()),
    )
}

fn strip_zeros(digits: String, mut exp: i64) -> (String, i64) {
    let mut digits = digits.trim_start_matches('0').to_string();
    while digits.ends_with('0') {
        digits.pop();
        exp += 1;
    }
    if digits.is_empty() {
        exp = 0;
    }
    (digits, exp)
}

pub fn validate_profile(
    user_id: u32,
    first_name: &str,
    last_name: &str,
    email: &str,
    income_text: &str,
    savings_text: &str,
) -> Result<Profile, ValidationError> {
    let monthly_income = parse_decimal("income", income_text)?;
    let target_savings = parse_decimal("savings", savings_text)?;
    Ok(Profile {
        user_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        monthly_income,
        target_savings,
    })
}

pub fn validate_transaction(
    profile: Option<&Profile>,
    next_id: u32,
    date: Option<NaiveDate>,
    amount_text: &str,
    category: &str,
    kind: Option<TransactionKind>,
    description: &str,
) -> Result<TransactionRecord, ValidationError> {
    let profile = profile.ok_or(ValidationError::MissingField("profile"))?;
    let amount = parse_decimal("amount", amount_text)?;
    let date = date.ok_or(ValidationError::MissingField("date"))?;
    let category = required("category", category)?;
    let kind = kind.ok_or(ValidationError::MissingField("type"))?;
    let description = required("description", description)?;

    Ok(TransactionRecord {
        transaction_id: next_id,
        date,
        amount,
        category,
        kind,
        description,
        profile: profile.clone(),
    })
}

fn required(field: &'static str, text: &str) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        validate_profile(1, "Ada", "Lovelace", "ada@example.com", "3000.50", "500").unwrap()
    }

    fn jan15() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, 15)
    }

    #[test]
    fn profile_numbers_keep_their_value() {
        let p = profile();
        assert_eq!(p.user_id, 1);
        assert_eq!(p.monthly_income, Decimal::new(300050, 2));
        assert_eq!(p.target_savings, Decimal::new(500, 0));
    }

    #[test]
    fn profile_rejects_non_numeric_income() {
        let err = validate_profile(1, "Ada", "Lovelace", "", "abc", "500").unwrap_err();
        assert_eq!(err.kind(), "NotANumber");
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: "income",
                input: "abc".into()
            }
        );
    }

    #[test]
    fn profile_rejects_non_numeric_savings() {
        let err = validate_profile(1, "Ada", "Lovelace", "", "10", "").unwrap_err();
        assert_eq!(err.kind(), "NotANumber");
    }

    #[test]
    fn profile_does_not_check_names_or_ranges() {
        let p = validate_profile(1, "", "", "not-an-email", "-20", "0").unwrap();
        assert_eq!(p.monthly_income, Decimal::new(-20, 0));
        assert_eq!(p.email, "not-an-email");
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(parse_decimal("x", " 42.00 ").unwrap(), Decimal::new(42, 0));
        assert_eq!(parse_decimal("x", "+7").unwrap(), Decimal::new(7, 0));
        assert_eq!(parse_decimal("x", "-3.5").unwrap(), Decimal::new(-35, 1));
        assert_eq!(parse_decimal("x", "1e3").unwrap(), Decimal::new(1000, 0));
        assert_eq!(parse_decimal("x", "2.5E-1").unwrap(), Decimal::new(25, 2));
        assert_eq!(parse_decimal("x", ".5").unwrap(), Decimal::new(5, 1));
        assert_eq!(parse_decimal("x", "-0.000").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("x", "1.5000").unwrap(), Decimal::new(15, 1));
        for bad in ["", "   ", "forty", "1_000", "NaN", "Infinity", "1.2.3", "12abc"] {
            assert!(parse_decimal("x", bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn decimal_must_fit_exactly() {
        let max = "79228162514264337593543950335";
        assert_eq!(parse_decimal("x", max).unwrap(), Decimal::MAX);
        assert_eq!(
            parse_decimal("x", "0.1234567890123456789012345678").unwrap(),
            Decimal::from_str("0.1234567890123456789012345678").unwrap()
        );
        for bad in [
            "0.12345678901234567890123456789012",
            "1e-30",
            "1e40",
            "100000000000000000000000000000",
            "79228162514264337593543950336",
        ] {
            let err = parse_decimal("amount", bad).unwrap_err();
            assert_eq!(err.kind(), "NotANumber", "accepted {bad:?}");
        }
    }

    #[test]
    fn transaction_from_valid_input() {
        let p = profile();
        let tx = validate_transaction(
            Some(&p),
            1,
            jan15(),
            "42.00",
            "Food",
            Some(TransactionKind::Expense),
            "Lunch",
        )
        .unwrap();
        assert_eq!(tx.transaction_id, 1);
        assert_eq!(tx.amount, Decimal::new(4200, 2));
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.profile, p);
    }

    #[test]
    fn transaction_without_profile_is_missing_field() {
        let err = validate_transaction(
            None,
            1,
            jan15(),
            "42.00",
            "Food",
            Some(TransactionKind::Expense),
            "Lunch",
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("profile"));
    }

    #[test]
    fn missing_profile_wins_over_bad_amount() {
        let err = validate_transaction(None, 1, None, "forty", "", None, "").unwrap_err();
        assert_eq!(err.kind(), "MissingField");
    }

    #[test]
    fn transaction_rejects_bad_amount() {
        let p = profile();
        let err = validate_transaction(
            Some(&p),
            1,
            jan15(),
            "forty",
            "Food",
            Some(TransactionKind::Expense),
            "Lunch",
        )
        .unwrap_err();
        assert_eq!(err.kind(), "NotANumber");
    }

    #[test]
    fn transaction_requires_every_field() {
        let p = profile();
        let kind = Some(TransactionKind::Income);
        let cases = [
            (None, "Salary", kind, "Jan", "date"),
            (jan15(), " ", kind, "Jan", "category"),
            (jan15(), "Salary", None, "Jan", "type"),
            (jan15(), "Salary", kind, "", "description"),
        ];
        for (date, category, kind, description, field) in cases {
            let err =
                validate_transaction(Some(&p), 1, date, "10", category, kind, description)
                    .unwrap_err();
            assert_eq!(err, ValidationError::MissingField(field));
        }
    }

    #[test]
    fn amount_sign_is_not_tied_to_kind() {
        let p = profile();
        let tx = validate_transaction(
            Some(&p),
            3,
            jan15(),
            "-15",
            "Refund",
            Some(TransactionKind::Income),
            "Returned item",
        )
        .unwrap();
        assert_eq!(tx.amount, Decimal::new(-15, 0));
        assert_eq!(tx.transaction_id, 3);
    }
}
