//! ERC-20 amount scaling and summary types.
//!
//! Every token amount crossing the contract boundary is scaled by the
//! contract's reported `decimals` using fixed-point conversion; floats
//! never touch an on-chain quantity.

use alloy::primitives::U256;
use alloy::primitives::utils::{UnitsError, format_units, parse_units};
use serde::{Deserialize, Serialize};

use crate::fmt::trim_decimal_zeros;

/// A token's identity and the connected account's position in it.
///
/// Amounts are decimal strings already scaled by [`TokenSummary::decimals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSummary {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Decimals the contract reports.
    pub decimals: u8,
    /// Total supply as a scaled decimal string.
    pub total_supply: String,
    /// The connected account's balance as a scaled decimal string.
    pub balance: String,
}

/// Scale a raw on-chain amount down by `decimals` into a decimal string.
///
/// # Errors
///
/// [`UnitsError`] when `decimals` exceeds the representable range.
pub fn format_amount(value: U256, decimals: u8) -> Result<String, UnitsError> {
    Ok(trim_decimal_zeros(&format_units(value, decimals)?).to_string())
}

/// Scale a user-entered decimal string up by `decimals` into a raw
/// on-chain amount.
///
/// # Errors
///
/// [`UnitsError`] when the string is not a decimal number or carries more
/// fractional digits than `decimals` allows.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    Ok(parse_units(amount, decimals)?.get_absolute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_down_by_reported_decimals() {
        assert_eq!(format_amount(U256::from(1_500_000u64), 6).unwrap(), "1.5");
        assert_eq!(
            format_amount(U256::from(2_500_000_000_000_000_000u128), 18).unwrap(),
            "2.5"
        );
        assert_eq!(format_amount(U256::from(1_000_000u64), 6).unwrap(), "1");
    }

    #[test]
    fn scales_up_by_reported_decimals() {
        assert_eq!(parse_amount("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(
            parse_amount("2.5", 18).unwrap(),
            U256::from(2_500_000_000_000_000_000u128)
        );
    }

    #[test]
    fn rejects_non_decimal_input() {
        assert!(parse_amount("not a number", 6).is_err());
    }
}
