//! Telegram framing
//!
//! Frame format:
//! - CONTENT (n bytes): command code followed by its arguments
//! - TERMINATOR (1 byte): 0x0D
//! - CHECKSUM (1 byte): 0x72 XOR all CONTENT bytes

use alloc::string::String;
use alloc::vec::Vec;

use crate::checksum::{checksum, TERMINATOR};

/// Errors that can occur while framing or checking a telegram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelegramError {
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Fewer bytes than a terminator and checksum
    Incomplete,
    /// Terminator missing in front of the checksum byte
    MissingTerminator,
    /// Checksum mismatch
    InvalidChecksum,
}

/// A built telegram
///
/// Content is fixed at construction. Framing bytes are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telegram {
    content: String,
}

impl Telegram {
    /// Create a telegram around already-built content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Content without terminator and checksum
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Checksum byte sent after the terminator
    pub fn checksum(&self) -> u8 {
        checksum(self.content.as_bytes())
    }

    /// Length on the wire (content + terminator + checksum)
    pub fn len(&self) -> usize {
        self.content.len() + 2
    }

    /// Always false; a telegram carries at least its framing bytes
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Encode this telegram into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, TelegramError> {
        let frame_len = self.len();
        if buffer.len() < frame_len {
            return Err(TelegramError::BufferTooSmall);
        }

        let content = self.content.as_bytes();
        buffer[..content.len()].copy_from_slice(content);
        buffer[content.len()] = TERMINATOR;
        buffer[content.len() + 1] = self.checksum();

        Ok(frame_len)
    }

    /// Encode this telegram into a new Vec
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.content.as_bytes());
        out.push(TERMINATOR);
        out.push(self.checksum());
        out
    }
}

/// Check a received telegram and return its content bytes
pub fn verify(frame: &[u8]) -> Result<&[u8], TelegramError> {
    if frame.len() < 2 {
        return Err(TelegramError::Incomplete);
    }
    let (content, trailer) = frame.split_at(frame.len() - 2);
    if trailer[0] != TERMINATOR {
        return Err(TelegramError::MissingTerminator);
    }
    if trailer[1] != checksum(content) {
        return Err(TelegramError::InvalidChecksum);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_line_telegram() {
        let telegram = Telegram::new("l007");
        let mut buffer = [0u8; 10];
        let len = telegram.encode(&mut buffer).unwrap();

        assert_eq!(len, 6);
        assert_eq!(&buffer[..4], b"l007");
        assert_eq!(buffer[4], TERMINATOR);
        assert_eq!(buffer[5], checksum(b"l007"));
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let telegram = Telegram::new("z042");
        let mut buffer = [0u8; 5];
        assert_eq!(
            telegram.encode(&mut buffer),
            Err(TelegramError::BufferTooSmall)
        );
    }

    #[test]
    fn test_to_bytes_matches_encode() {
        let telegram = Telegram::new("zM Test");
        let mut buffer = [0u8; 16];
        let len = telegram.encode(&mut buffer).unwrap();
        assert_eq!(telegram.to_bytes(), &buffer[..len]);
    }

    #[test]
    fn test_empty_content_still_framed() {
        let telegram = Telegram::new("");
        assert_eq!(telegram.len(), 2);
        assert_eq!(telegram.to_bytes(), [TERMINATOR, 0x72]);
    }

    #[test]
    fn test_verify_accepts_own_output() {
        let bytes = Telegram::new("xC3").to_bytes();
        assert_eq!(verify(&bytes), Ok(&b"xC3"[..]));
    }

    #[test]
    fn test_verify_rejects_corruption() {
        let mut bytes = Telegram::new("l005").to_bytes();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert_eq!(verify(&bytes), Err(TelegramError::InvalidChecksum));

        let mut bytes = Telegram::new("l005").to_bytes();
        bytes[4] = b'\n';
        assert_eq!(verify(&bytes), Err(TelegramError::MissingTerminator));

        assert_eq!(verify(&[0x0D]), Err(TelegramError::Incomplete));
    }
}
