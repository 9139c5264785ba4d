//! # Shared Utility Functions
//!
//! Display helpers for wallet accounts returned by browser providers.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters with an ellipsis
//! - [`truncate_address`] - 4/4 truncation, keeping an Ethereum `0x` prefix intact
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! assert_eq!(truncate_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"), "8W6Q...JKAL");
//! assert_eq!(truncate_address("0x52908400098527886E0F7030069857D2E4169EE7"), "0x5290...9EE7");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses too short to shorten are returned unchanged. Works on characters, so
/// non-ASCII input never splits inside a code point.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...uJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Shorten an account for logs and labels.
///
/// Ethereum accounts keep their `0x` marker ahead of the four visible digits.
pub fn truncate_address(address: &str) -> String {
    match address.strip_prefix("0x") {
        Some(hex) => format!("0x{}", format_address(hex, 4, 4)),
        None => format_address(address, 4, 4),
    }
}
