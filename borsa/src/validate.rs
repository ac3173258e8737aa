//! Pure form validators for transfer inputs.
//!
//! Validators have no side effects and never call into the session layer;
//! their results gate submission before any chain operation runs. A field
//! failure resolves locally and is never sent to a provider.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Validate a recipient or contract address string.
///
/// Accepts exactly `0x` followed by 40 hexadecimal characters,
/// case-insensitive. The input is trimmed first.
///
/// # Errors
///
/// [`FieldError::Required`] when the trimmed input is empty,
/// [`FieldError::InvalidFormat`] otherwise.
pub fn validate_address(address: &str) -> Result<(), FieldError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(FieldError::Required);
    }
    let hex = address
        .strip_prefix("0x")
        .ok_or(FieldError::InvalidFormat)?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

/// Validate a user-entered amount.
///
/// `max` is an optional UI-level sanity cap in whole native-currency
/// units. Precision-critical paths never use this float: submission parses
/// the user's decimal string with fixed-point conversion.
///
/// # Errors
///
/// [`FieldError::Required`] when no amount was entered,
/// [`FieldError::NotPositive`] for zero or negative amounts,
/// [`FieldError::ExceedsMax`] above the cap.
pub fn validate_amount(amount: Option<f64>, max: Option<f64>) -> Result<(), FieldError> {
    let amount = amount.ok_or(FieldError::Required)?;
    if amount <= 0.0 {
        return Err(FieldError::NotPositive);
    }
    if let Some(max) = max
        && amount > max
    {
        return Err(FieldError::ExceedsMax { max });
    }
    Ok(())
}

/// A transfer form as entered by the user.
///
/// Transient and consumer-owned: validated field-by-field before
/// submission, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Recipient address string, as typed.
    pub recipient: String,
    /// Amount in whole native-currency units, `None` until entered.
    pub amount: Option<f64>,
}

impl TransferRequest {
    /// Validate both fields against an optional amount cap.
    ///
    /// # Errors
    ///
    /// The first [`FieldError`] encountered, recipient first.
    pub fn validate(&self, max: Option<f64>) -> Result<(), FieldError> {
        validate_address(&self.recipient)?;
        validate_amount(self.amount, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accepts_canonical_forms() {
        assert_eq!(
            validate_address("0x1234567890abcdef1234567890abcdef12345678"),
            Ok(())
        );
        // Mixed case is fine; checksums are not enforced at the form level.
        assert_eq!(
            validate_address("0x1234567890ABCDEF1234567890abcdef12345678"),
            Ok(())
        );
        assert_eq!(
            validate_address("  0x1234567890abcdef1234567890abcdef12345678  "),
            Ok(())
        );
    }

    #[test]
    fn address_rejects_empty() {
        assert_eq!(validate_address(""), Err(FieldError::Required));
        assert_eq!(validate_address("   "), Err(FieldError::Required));
    }

    #[test]
    fn address_rejects_malformed() {
        // No prefix.
        assert_eq!(
            validate_address("1234567890abcdef1234567890abcdef12345678"),
            Err(FieldError::InvalidFormat)
        );
        // Too short.
        assert_eq!(
            validate_address("0x1234567890abcdef1234567890abcdef1234567"),
            Err(FieldError::InvalidFormat)
        );
        // Too long.
        assert_eq!(
            validate_address("0x1234567890abcdef1234567890abcdef123456789"),
            Err(FieldError::InvalidFormat)
        );
        // Non-hex character.
        assert_eq!(
            validate_address("0x1234567890abcdef1234567890abcdef1234567g"),
            Err(FieldError::InvalidFormat)
        );
    }

    #[test]
    fn amount_rejects_missing_and_nonpositive() {
        assert_eq!(validate_amount(None, None), Err(FieldError::Required));
        assert_eq!(
            validate_amount(Some(0.0), None),
            Err(FieldError::NotPositive)
        );
        assert_eq!(
            validate_amount(Some(-1.5), None),
            Err(FieldError::NotPositive)
        );
    }

    #[test]
    fn amount_enforces_cap_when_configured() {
        assert_eq!(validate_amount(Some(999.0), Some(1000.0)), Ok(()));
        assert_eq!(validate_amount(Some(1000.0), Some(1000.0)), Ok(()));
        assert_eq!(
            validate_amount(Some(1000.5), Some(1000.0)),
            Err(FieldError::ExceedsMax { max: 1000.0 })
        );
        // No cap configured: anything positive passes.
        assert_eq!(validate_amount(Some(1_000_000.0), None), Ok(()));
    }

    #[test]
    fn transfer_request_validates_recipient_first() {
        let request = TransferRequest {
            recipient: "not-an-address".into(),
            amount: None,
        };
        assert_eq!(request.validate(None), Err(FieldError::InvalidFormat));

        let request = TransferRequest {
            recipient: "0x1234567890abcdef1234567890abcdef12345678".into(),
            amount: Some(2.5),
        };
        assert_eq!(request.validate(Some(1000.0)), Ok(()));
    }
}
