//! Lossy display formatting for addresses, hashes, and decimal strings.
//!
//! These helpers are forward-only: truncated output is for display and
//! cannot be parsed back.

/// Truncate an address for display: first 6 characters, `...`, last 4.
///
/// Strings too short to truncate (including empty input) pass through
/// unchanged.
#[must_use]
pub fn format_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Truncate a transaction hash for display: first 10 characters, `...`,
/// last 8.
#[must_use]
pub fn format_tx_hash(hash: &str) -> String {
    if hash.len() <= 18 {
        return hash.to_string();
    }
    format!("{}...{}", &hash[..10], &hash[hash.len() - 8..])
}

/// Strip trailing fractional zeros (and a dangling `.`) from a fixed-point
/// decimal string.
///
/// `"2.500000000000000000"` becomes `"2.5"`, `"3.000"` becomes `"3"`.
/// Strings without a fractional part are returned unchanged.
#[must_use]
pub fn trim_decimal_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_truncates_to_first6_last4() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        assert_eq!(format_address(addr), "0x1234...5678");
    }

    #[test]
    fn empty_address_passes_through() {
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn hash_truncates_to_first10_last8() {
        let hash = "0xdeadbeefcafebabedeadbeefcafebabedeadbeefcafebabedeadbeefcafebabe";
        assert_eq!(format_tx_hash(hash), "0xdeadbeef...cafebabe");
    }

    #[test]
    fn short_hash_passes_through() {
        assert_eq!(format_tx_hash("0xabc"), "0xabc");
    }

    #[test]
    fn trims_trailing_fraction_zeros() {
        assert_eq!(trim_decimal_zeros("2.500000000000000000"), "2.5");
        assert_eq!(trim_decimal_zeros("3.000000000000000000"), "3");
        assert_eq!(trim_decimal_zeros("0.0"), "0");
    }

    #[test]
    fn integer_part_is_untouched() {
        assert_eq!(trim_decimal_zeros("1000"), "1000");
        assert_eq!(trim_decimal_zeros("120.034000"), "120.034");
    }
}
