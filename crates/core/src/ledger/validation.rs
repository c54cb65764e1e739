//! Boundary validation for new transactions.
//!
//! Mirrors the dashboard's form rules: free-text fields are 4-30
//! characters, amounts are strictly positive decimals.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::CreateTransactionInput;

const TEXT_MIN: usize = 4;
const TEXT_MAX: usize = 30;

/// Validation errors for transaction input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerValidationError {
    /// Amount must be strictly positive.
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// A text field is outside its allowed length.
    #[error("{field} must be between {TEXT_MIN} and {TEXT_MAX} characters")]
    FieldLength {
        /// The offending field name.
        field: &'static str,
    },
}

/// Validates caller-supplied transaction fields.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_input(input: &CreateTransactionInput) -> Result<(), LedgerValidationError> {
    if input.amount <= Decimal::ZERO {
        return Err(LedgerValidationError::NonPositiveAmount(input.amount));
    }
    for (field, value) in [
        ("description", &input.description),
        ("bank", &input.bank),
        ("kind", &input.kind),
    ] {
        let len = value.chars().count();
        if !(TEXT_MIN..=TEXT_MAX).contains(&len) {
            return Err(LedgerValidationError::FieldLength { field });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn input() -> CreateTransactionInput {
        CreateTransactionInput {
            description: "rent payment".into(),
            amount: dec!(30.00),
            bank: "First National".into(),
            kind: "transfer".into(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&input()).is_ok());
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1.00))]
    fn test_non_positive_amount_fails(#[case] amount: Decimal) {
        let mut i = input();
        i.amount = amount;
        assert_eq!(
            validate_input(&i),
            Err(LedgerValidationError::NonPositiveAmount(amount))
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("a-description-well-over-thirty-characters-long")]
    fn test_description_length_bounds(#[case] description: &str) {
        let mut i = input();
        i.description = description.into();
        assert_eq!(
            validate_input(&i),
            Err(LedgerValidationError::FieldLength {
                field: "description"
            })
        );
    }

    #[test]
    fn test_bank_and_kind_are_checked() {
        let mut i = input();
        i.bank = "ab".into();
        assert_eq!(
            validate_input(&i),
            Err(LedgerValidationError::FieldLength { field: "bank" })
        );

        let mut i = input();
        i.kind = "x".into();
        assert_eq!(
            validate_input(&i),
            Err(LedgerValidationError::FieldLength { field: "kind" })
        );
    }
}
