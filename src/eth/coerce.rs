//! Query-string values to ABI argument types.

use ethers::types::{Address, U256};
use ethers::utils::to_checksum;

use super::EncodeError;

/// `0x` followed by 40 hex digits. Mixed-case input must carry a valid
/// EIP-55 checksum; all-lower and all-upper forms are taken as-is.
pub fn parse_address(s: &str) -> Result<Address, EncodeError> {
    let invalid = || EncodeError::InvalidAddress(s.to_string());

    let digits = s
        .strip_prefix("0x")
        .filter(|d| d.len() == 40)
        .ok_or_else(invalid)?;

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
    let address = Address::from(bytes);

    let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
        && digits.chars().any(|c| c.is_ascii_uppercase());
    if mixed_case && to_checksum(&address, None) != s {
        return Err(invalid());
    }

    Ok(address)
}

/// Big-integer literal: trimmed, decimal or `0x` hex, unsigned, at most 256 bits.
/// Blank input is zero.
pub fn parse_uint(s: &str) -> Result<U256, EncodeError> {
    let invalid = || EncodeError::InvalidNumber(s.to_string());
    let t = s.trim();

    if t.is_empty() {
        return Ok(U256::zero());
    }

    if let Some(digits) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        if digits.trim_start_matches('0').len() > 64 {
            return Err(invalid());
        }
        return U256::from_str_radix(digits, 16).map_err(|_| invalid());
    }

    if !t.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    U256::from_dec_str(t).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accepts_single_case_forms() {
        let upper = format!("0x{}", "A".repeat(40));
        let lower = format!("0x{}", "a".repeat(40));
        assert_eq!(parse_address(&upper).unwrap(), Address::repeat_byte(0xaa));
        assert_eq!(parse_address(&lower).unwrap(), Address::repeat_byte(0xaa));
    }

    #[test]
    fn address_checks_mixed_case_checksum() {
        let good = "0x81AeC0B87CAa631365B0AC0B628A84afdf6f1Fe9";
        assert!(parse_address(good).is_ok());

        let bad = "0x81aEC0B87CAa631365B0AC0B628A84afdf6f1Fe9";
        assert!(matches!(parse_address(bad), Err(EncodeError::InvalidAddress(_))));
    }

    #[test]
    fn address_rejects_wrong_shape() {
        for input in [
            "",
            "0x",
            "81AeC0B87CAa631365B0AC0B628A84afdf6f1Fe9",
            "0x81AeC0B87CAa631365B0AC0B628A84afdf6f1F",
            "0xZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ",
            "player.eth",
        ] {
            assert!(parse_address(input).is_err(), "{input}");
        }
    }

    #[test]
    fn uint_parses_decimal_and_hex() {
        assert_eq!(parse_uint("50").unwrap(), U256::from(50));
        assert_eq!(parse_uint(" 50 ").unwrap(), U256::from(50));
        assert_eq!(parse_uint("0x32").unwrap(), U256::from(50));
        assert_eq!(parse_uint("").unwrap(), U256::zero());
        assert_eq!(parse_uint(&U256::MAX.to_string()).unwrap(), U256::MAX);
    }

    #[test]
    fn uint_rejects_non_integers() {
        for input in ["abc", "-5", "1.5", "1e3", "0x", "0xg1", "+7"] {
            assert!(
                matches!(parse_uint(input), Err(EncodeError::InvalidNumber(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn uint_rejects_overflow() {
        let too_big = format!("{}0", U256::MAX);
        assert!(parse_uint(&too_big).is_err());
        assert!(parse_uint(&format!("0x1{}", "0".repeat(64))).is_err());
    }
}
