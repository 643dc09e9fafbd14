//! Multi-block text layout
//!
//! The multi-block text telegram carries free text in 16-byte blocks. The
//! header announces a block count taken from the *unpadded* text, while the
//! payload itself gets extra line breaks and space padding. The two are
//! tracked separately and are not reconciled.
//!
//! Payload rules, applied in order:
//! 1. if the first line break sits after the first character, add a line break
//! 2. always add two line breaks
//! 3. pad with spaces to a whole number of blocks

use alloc::string::String;

/// Bytes per text block
pub const BLOCK_LEN: usize = 16;

/// Text split into the multi-block layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiBlockText {
    block_count: u8,
    payload: String,
}

impl MultiBlockText {
    /// Lay out `text` for the multi-block command
    ///
    /// The block count saturates at 255.
    pub fn split(text: &str) -> Self {
        let blocks = text.len().div_ceil(BLOCK_LEN);
        let block_count = u8::try_from(blocks).unwrap_or(u8::MAX);

        let mut payload = String::with_capacity(text.len() + 3 + BLOCK_LEN);
        payload.push_str(text);
        if text.find('\n').is_some_and(|idx| idx > 0) {
            payload.push('\n');
        }
        payload.push_str("\n\n");

        let remainder = payload.len() % BLOCK_LEN;
        if remainder != 0 {
            for _ in remainder..BLOCK_LEN {
                payload.push(' ');
            }
        }

        Self {
            block_count,
            payload,
        }
    }

    /// Block count announced in the telegram header
    pub fn block_count(&self) -> u8 {
        self.block_count
    }

    /// Padded payload text
    pub fn payload(&self) -> &str {
        &self.payload
    }
}
