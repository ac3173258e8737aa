//! Static chain metadata: network names and block-explorer links.

/// Human-readable network name for a chain id.
///
/// Unknown ids fall back to `"Chain ID {id}"`.
#[must_use]
pub fn network_name(chain_id: u64) -> String {
    match chain_id {
        1 => "Ethereum Mainnet".into(),
        5 => "Goerli Testnet".into(),
        11_155_111 => "Sepolia Testnet".into(),
        137 => "Polygon Mainnet".into(),
        80_001 => "Mumbai Testnet".into(),
        1337 => "Localhost".into(),
        id => format!("Chain ID {id}"),
    }
}

/// Block-explorer URL for a transaction, keyed on the connected chain id.
///
/// Unrecognized chains fall back to the mainnet explorer.
#[must_use]
pub fn explorer_tx_url(chain_id: u64, tx_hash: &str) -> String {
    let host = match chain_id {
        5 => "goerli.etherscan.io",
        11_155_111 => "sepolia.etherscan.io",
        137 => "polygonscan.com",
        80_001 => "mumbai.polygonscan.com",
        _ => "etherscan.io",
    };
    format!("https://{host}/tx/{tx_hash}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_network_names() {
        assert_eq!(network_name(1), "Ethereum Mainnet");
        assert_eq!(network_name(5), "Goerli Testnet");
        assert_eq!(network_name(11_155_111), "Sepolia Testnet");
        assert_eq!(network_name(137), "Polygon Mainnet");
        assert_eq!(network_name(80_001), "Mumbai Testnet");
        assert_eq!(network_name(1337), "Localhost");
    }

    #[test]
    fn unknown_network_name_falls_back_to_chain_id() {
        assert_eq!(network_name(42_161), "Chain ID 42161");
    }

    #[test]
    fn explorer_url_follows_chain_id() {
        assert_eq!(
            explorer_tx_url(1, "0xabc"),
            "https://etherscan.io/tx/0xabc"
        );
        assert_eq!(
            explorer_tx_url(11_155_111, "0xabc"),
            "https://sepolia.etherscan.io/tx/0xabc"
        );
        assert_eq!(
            explorer_tx_url(137, "0xabc"),
            "https://polygonscan.com/tx/0xabc"
        );
    }

    #[test]
    fn explorer_url_unknown_chain_falls_back_to_mainnet() {
        assert_eq!(
            explorer_tx_url(42_161, "0xabc"),
            "https://etherscan.io/tx/0xabc"
        );
    }
}
