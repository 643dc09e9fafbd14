//! IBIS commands
//!
//! Each command maps to one telegram. Numeric arguments are formatted but
//! never range-checked: a line number of 1234 goes out as `l1234`.

use alloc::string::String;

use crate::charset::Charset;
use crate::format::{nibble_encode, zero_pad};
use crate::multiblock::MultiBlockText;
use crate::telegram::Telegram;

// Command codes
pub const CMD_LINE: &str = "l";
pub const CMD_DESTINATION: &str = "z";
pub const CMD_CYCLE: &str = "xC";
pub const CMD_TIME: &str = "u";
pub const CMD_TEXT: &str = "v";
pub const CMD_COMPLEX_TEXT: &str = "zM ";
pub const CMD_SYMBOL: &str = "lE0";
pub const CMD_MULTI_BLOCK: &str = "aA";

/// Attribute marker between the block count and the multi-block payload
pub const MULTI_BLOCK_ATTRIBUTE: &str = "A0";

/// Digits used for line and destination numbers
pub const NUMBER_WIDTH: usize = 3;

/// Commands understood by IBIS destination signs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Line number (`l`, 3 digits)
    Line(u16),
    /// Destination code (`z`, 3 digits)
    Destination(u16),
    /// Display cycle (`xC`, unpadded)
    Cycle(u8),
    /// Clock, usually `HHmm` (`u`)
    Time(&'a str),
    /// Free text (`v`)
    Text(&'a str),
    /// Complex/menu text (`zM `)
    ComplexText(&'a str),
    /// Announcer symbol (`lE0`)
    Symbol(&'a str),
    /// Multi-block free text (`aA`)
    MultiBlockText { address: &'a str, text: &'a str },
}

impl<'a> Command<'a> {
    /// Whether the charset remap applies to this command
    pub fn is_free_text(&self) -> bool {
        matches!(
            self,
            Command::Text(_) | Command::ComplexText(_) | Command::MultiBlockText { .. }
        )
    }

    /// Build the telegram content for this command
    ///
    /// The charset is applied to free text before layout, so multi-block
    /// padding is computed on the bytes that are actually sent.
    pub fn content(&self, charset: Charset) -> String {
        let charset = if self.is_free_text() {
            charset
        } else {
            Charset::Passthrough
        };

        let mut content = String::new();
        match self {
            Command::Line(line) => {
                content.push_str(CMD_LINE);
                content.push_str(&zero_pad(*line as u32, NUMBER_WIDTH));
            }
            Command::Destination(dest) => {
                content.push_str(CMD_DESTINATION);
                content.push_str(&zero_pad(*dest as u32, NUMBER_WIDTH));
            }
            Command::Cycle(cycle) => {
                content.push_str(CMD_CYCLE);
                content.push_str(&zero_pad(*cycle as u32, 0));
            }
            Command::Time(time) => {
                content.push_str(CMD_TIME);
                content.push_str(time);
            }
            Command::Text(text) => {
                content.push_str(CMD_TEXT);
                content.push_str(&charset.apply(text));
            }
            Command::ComplexText(text) => {
                content.push_str(CMD_COMPLEX_TEXT);
                content.push_str(&charset.apply(text));
            }
            Command::Symbol(number) => {
                content.push_str(CMD_SYMBOL);
                content.push_str(number);
            }
            Command::MultiBlockText { address, text } => {
                let layout = MultiBlockText::split(&charset.apply(text));
                content.push_str(CMD_MULTI_BLOCK);
                content.push_str(address);
                content.push_str(&nibble_encode(layout.block_count()));
                content.push_str(MULTI_BLOCK_ATTRIBUTE);
                content.push_str(layout.payload());
            }
        }
        content
    }

    /// Build the full telegram for this command
    pub fn to_telegram(&self, charset: Charset) -> Telegram {
        Telegram::new(self.content(charset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(command: Command<'_>) -> String {
        command.content(Charset::Passthrough)
    }

    #[test]
    fn test_line() {
        assert_eq!(content(Command::Line(5)), "l005");
        assert_eq!(content(Command::Line(7)), "l007");
        assert_eq!(content(Command::Line(1234)), "l1234");
    }

    #[test]
    fn test_destination() {
        assert_eq!(content(Command::Destination(42)), "z042");
        assert_eq!(content(Command::Destination(0)), "z000");
    }

    #[test]
    fn test_cycle() {
        assert_eq!(content(Command::Cycle(3)), "xC3");
        assert_eq!(content(Command::Cycle(15)), "xC15");
        assert_eq!(content(Command::Cycle(200)), "xC200");
    }

    #[test]
    fn test_time_is_raw() {
        assert_eq!(content(Command::Time("0815")), "u0815");
    }

    #[test]
    fn test_text() {
        assert_eq!(content(Command::Text("Hauptbahnhof")), "vHauptbahnhof");
    }

    #[test]
    fn test_complex_text_keeps_space() {
        assert_eq!(content(Command::ComplexText("Test")), "zM Test");
    }

    #[test]
    fn test_symbol() {
        assert_eq!(content(Command::Symbol("7")), "lE07");
    }

    #[test]
    fn test_multi_block_header() {
        let text = content(Command::MultiBlockText {
            address: "1",
            text: "Hallo",
        });
        assert_eq!(text, "aA11A0Hallo\n\n         ");
    }

    #[test]
    fn test_multi_block_count_uses_vdv_hex() {
        // 12 blocks of text -> block count "<"
        let long = "x".repeat(16 * 12);
        let text = content(Command::MultiBlockText {
            address: "2",
            text: &long,
        });
        assert!(text.starts_with("aA2<A0"));

        // 17 blocks -> two-character count "11"
        let longer = "x".repeat(16 * 17);
        let text = content(Command::MultiBlockText {
            address: "2",
            text: &longer,
        });
        assert!(text.starts_with("aA211A0"));
    }

    #[test]
    fn test_extended_charset_on_free_text() {
        let command = Command::Text("Bürgerstraße");
        assert_eq!(command.content(Charset::Extended), "vB}rgerstra~e");
        assert_eq!(command.content(Charset::Passthrough), "vBürgerstraße");
    }

    #[test]
    fn test_extended_charset_on_complex_text() {
        let command = Command::ComplexText("Gleis Süd");
        assert!(command.is_free_text());
        assert_eq!(command.content(Charset::Extended), "zM Gleis S}d");
    }

    #[test]
    fn test_extended_charset_ignores_non_text() {
        let command = Command::Time("ü");
        assert!(!command.is_free_text());
        assert_eq!(command.content(Charset::Extended), "uü");

        let symbol = Command::Symbol("ß");
        assert!(!symbol.is_free_text());
        assert_eq!(symbol.content(Charset::Extended), "lE0ß");
    }

    #[test]
    fn test_extended_charset_before_block_padding() {
        // "Grüß" is 6 bytes raw but 4 after remap; padding follows the remapped text
        let command = Command::MultiBlockText {
            address: "1",
            text: "Grüß",
        };
        let text = command.content(Charset::Extended);
        assert_eq!(text, "aA11A0Gr}~\n\n          ");
        assert_eq!((text.len() - "aA11A0".len()) % 16, 0);
    }

    #[test]
    fn test_to_telegram() {
        let telegram = Command::Line(7).to_telegram(Charset::Passthrough);
        assert_eq!(telegram.content(), "l007");
        assert_eq!(telegram.len(), 6);
    }
}
