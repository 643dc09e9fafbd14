//! Number formatting for telegram arguments

use alloc::format;
use alloc::string::String;
use heapless::String as HString;

/// VDV nibble alphabet: `0`-`9` then `:;<=>?` for 10-15
pub const VDV_HEX_DIGITS: &[u8; 16] = b"0123456789:;<=>?";

/// Decimal `value` left-padded with zeros to at least `width` characters
///
/// `width` is a minimum: wider numbers are returned in full.
pub fn zero_pad(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Encode a byte in VDV hex
///
/// One character for 0-15, two (high nibble first) for 16-255. Callers laying
/// out telegrams must account for the variable length.
pub fn nibble_encode(value: u8) -> HString<2> {
    let mut out = HString::new();
    let high = value >> 4;
    let low = value & 0x0F;

    // Capacity is exactly two characters, pushes cannot fail
    if high > 0 {
        let _ = out.push(VDV_HEX_DIGITS[high as usize] as char);
    }
    let _ = out.push(VDV_HEX_DIGITS[low as usize] as char);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad(5, 3), "005");
        assert_eq!(zero_pad(42, 3), "042");
        assert_eq!(zero_pad(0, 3), "000");
        assert_eq!(zero_pad(999, 3), "999");
    }

    #[test]
    fn test_zero_pad_no_truncation() {
        assert_eq!(zero_pad(1234, 3), "1234");
        assert_eq!(zero_pad(7, 0), "7");
    }

    #[test]
    fn test_nibble_encode() {
        assert_eq!(nibble_encode(0).as_str(), "0");
        assert_eq!(nibble_encode(9).as_str(), "9");
        assert_eq!(nibble_encode(10).as_str(), ":");
        assert_eq!(nibble_encode(15).as_str(), "?");
        assert_eq!(nibble_encode(16).as_str(), "10");
        assert_eq!(nibble_encode(31).as_str(), "1?");
        assert_eq!(nibble_encode(255).as_str(), "??");
    }

    proptest! {
        #[test]
        fn prop_zero_pad_width(value in any::<u32>(), width in 0usize..12) {
            let padded = zero_pad(value, width);
            let natural = value.to_string();
            prop_assert_eq!(padded.len(), natural.len().max(width));
            prop_assert!(padded.ends_with(&natural));
            prop_assert_eq!(padded.parse::<u32>().unwrap(), value);
        }

        #[test]
        fn prop_nibble_length(value in any::<u8>()) {
            let expected = if value < 16 { 1 } else { 2 };
            prop_assert_eq!(nibble_encode(value).len(), expected);
        }
    }
}
