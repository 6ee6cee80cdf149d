use chrono::{DateTime, Utc};
use ethereum_types::U256;

use crate::error::CrawlError;

/// Strips the `0x` prefix and rejects empty or non-hex remainders. All RPC
/// quantity fields arrive in this form.
fn hex_digits(hex: &str) -> Result<&str, CrawlError> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| CrawlError::MalformedHex(format!("missing 0x prefix: {hex:?}")))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CrawlError::MalformedHex(format!("not a hex quantity: {hex:?}")));
    }

    Ok(digits)
}

/// Decodes a hex quantity into its canonical base-10 string. Wide enough for
/// 256-bit hashes, which the storage schema keeps as decimal text.
pub fn decode_quantity(hex: &str) -> Result<String, CrawlError> {
    let digits = hex_digits(hex)?;
    let value = U256::from_str_radix(digits, 16)
        .map_err(|_| CrawlError::MalformedHex(format!("quantity out of range: {hex:?}")))?;

    Ok(value.to_string())
}

/// Decodes a hex quantity that must fit a block height or Unix time.
pub fn decode_u64(hex: &str) -> Result<u64, CrawlError> {
    let digits = hex_digits(hex)?;
    u64::from_str_radix(digits, 16)
        .map_err(|_| CrawlError::MalformedHex(format!("quantity out of range: {hex:?}")))
}

/// Decodes a hex Unix time into a UTC calendar timestamp.
pub fn decode_timestamp(hex: &str) -> Result<DateTime<Utc>, CrawlError> {
    let seconds = decode_u64(hex)?;
    DateTime::from_timestamp(seconds as i64, 0)
        .ok_or_else(|| CrawlError::MalformedHex(format!("timestamp out of range: {hex:?}")))
}

/// Decodes a hex wei amount and scales it to ether (wei / 10^18). Amounts
/// beyond f64 precision round, matching the reference behavior.
pub fn decode_wei_to_ether(hex: &str) -> Result<f64, CrawlError> {
    let wei = decode_quantity(hex)?;
    let wei: f64 = wei
        .parse()
        .map_err(|_| CrawlError::MalformedHex(format!("wei amount unparseable: {hex:?}")))?;

    Ok(wei / 1e18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_decodes_to_decimal_string() {
        assert_eq!(decode_quantity("0x1a").unwrap(), "26");
        assert_eq!(decode_quantity("0x0").unwrap(), "0");
        assert_eq!(decode_quantity("0x00ff").unwrap(), "255");
    }

    #[test]
    fn quantity_handles_256_bit_hashes() {
        let hash = "0x88e96d4537bea4d9c05d12549907b32561d3bf31f45aae734cdc119f13406cb6";
        assert_eq!(
            decode_quantity(hash).unwrap(),
            "61926976929876314985342448722764970661723756728735993391456595527848534502582"
        );
    }

    #[test]
    fn quantity_rejects_malformed_input() {
        assert!(matches!(decode_quantity("1a"), Err(CrawlError::MalformedHex(_))));
        assert!(matches!(decode_quantity("0x"), Err(CrawlError::MalformedHex(_))));
        assert!(matches!(decode_quantity("0xzz"), Err(CrawlError::MalformedHex(_))));
        assert!(matches!(decode_quantity(""), Err(CrawlError::MalformedHex(_))));
    }

    #[test]
    fn u64_decode_rejects_oversized_values() {
        assert_eq!(decode_u64("0xde0b6b").unwrap(), 14551915);
        assert!(matches!(
            decode_u64("0x10000000000000000"),
            Err(CrawlError::MalformedHex(_))
        ));
    }

    #[test]
    fn timestamp_renders_utc_calendar_time() {
        // 0x5fd01380 = 1607472000
        let ts = decode_timestamp("0x5fd01380").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2020-12-09 00:00:00");
    }

    #[test]
    fn wei_scales_to_ether() {
        // 0xde0b6b3a7640000 = 10^18 wei
        assert_eq!(decode_wei_to_ether("0xde0b6b3a7640000").unwrap(), 1.0);
        assert_eq!(decode_wei_to_ether("0x0").unwrap(), 0.0);

        let half = decode_wei_to_ether("0x6f05b59d3b20000").unwrap();
        assert!((half - 0.5).abs() < 1e-12);
    }
}
