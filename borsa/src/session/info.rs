//! The published session snapshot.

use alloy::primitives::{Address, U256, utils::format_ether};
use serde::{Deserialize, Serialize};

use crate::{chain, fmt};

/// An immutable snapshot of the connected wallet session.
///
/// A snapshot is always fully populated: consumers observe either a whole
/// `SessionInfo` or no session at all, never partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// The authorized account.
    pub address: Address,
    /// Native-currency balance as a decimal string, trailing zeros
    /// trimmed. Derived from wei by fixed-point conversion.
    pub balance: String,
    /// Identifier of the connected network.
    pub chain_id: u64,
    /// Human-readable network label derived from [`Self::chain_id`].
    pub network_name: String,
}

impl SessionInfo {
    /// Build a snapshot from raw provider values.
    #[must_use]
    pub fn new(address: Address, balance_wei: U256, chain_id: u64) -> Self {
        Self {
            address,
            balance: fmt::trim_decimal_zeros(&format_ether(balance_wei)).to_string(),
            chain_id,
            network_name: chain::network_name(chain_id),
        }
    }

    /// The account as a checksummed `0x`-prefixed string.
    #[must_use]
    pub fn address_string(&self) -> String {
        self.address.to_checksum(None)
    }

    /// The account truncated for display (`first6...last4`).
    #[must_use]
    pub fn short_address(&self) -> String {
        fmt::format_address(&self.address_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_fully_populated() {
        let address = Address::repeat_byte(0xAA);
        let info = SessionInfo::new(address, U256::from(2_500_000_000_000_000_000u128), 1);

        assert_eq!(info.address, address);
        assert_eq!(info.balance, "2.5");
        assert_eq!(info.chain_id, 1);
        assert_eq!(info.network_name, "Ethereum Mainnet");
    }

    #[test]
    fn unknown_chain_gets_fallback_label() {
        let info = SessionInfo::new(Address::ZERO, U256::ZERO, 99_999);
        assert_eq!(info.network_name, "Chain ID 99999");
        assert_eq!(info.balance, "0");
    }

    #[test]
    fn short_address_truncates_checksummed_form() {
        let info = SessionInfo::new(Address::repeat_byte(0x11), U256::ZERO, 1);
        let full = info.address_string();
        assert_eq!(
            info.short_address(),
            format!("{}...{}", &full[..6], &full[full.len() - 4..])
        );
    }

    #[test]
    fn serializes_for_consumers() {
        let info = SessionInfo::new(Address::repeat_byte(0x22), U256::from(10u64).pow(U256::from(18u64)), 5);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["balance"], "1");
        assert_eq!(json["chain_id"], 5);
        assert_eq!(json["network_name"], "Goerli Testnet");
    }
}
