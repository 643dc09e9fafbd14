//! IBIS telegram checksum
//!
//! The sign computes `0x7F ^ content ^ CR` over a received telegram and
//! compares it with the trailing checksum byte. Folding the sentinel and the
//! terminator together gives the seed `0x72`, so the sender only has to XOR
//! the content bytes into it.

/// End-of-content marker sent after every telegram (carriage return)
pub const TERMINATOR: u8 = 0x0D;

/// All seven data lines high
pub const CHECKSUM_SENTINEL: u8 = 0x7F;

/// Sentinel with the terminator pre-folded in
pub const CHECKSUM_SEED: u8 = CHECKSUM_SENTINEL ^ TERMINATOR;

/// Checksum of telegram content using the standard seed
pub fn checksum(content: &[u8]) -> u8 {
    checksum_with_seed(content, CHECKSUM_SEED)
}

/// Checksum of `content` starting from an arbitrary seed
///
/// Useful to continue a checksum over a prefix that was already folded.
pub fn checksum_with_seed(content: &[u8], seed: u8) -> u8 {
    content.iter().fold(seed, |acc, &byte| acc ^ byte)
}
