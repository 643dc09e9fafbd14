//! Extended character remap
//!
//! IBIS signs use a 7-bit national variant of ASCII where the bracket and
//! brace positions carry German umlauts. With the extended charset enabled,
//! free text is rewritten onto those code points before it is framed.

use alloc::string::String;

/// Character handling for free-text commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Charset {
    /// Send text bytes unchanged
    #[default]
    Passthrough,
    /// Map umlauts and sharp s onto their 7-bit sign codes
    Extended,
}

/// Umlaut to sign code table
const EXTENDED_MAP: [(char, char); 7] = [
    ('ä', '{'),
    ('ö', '|'),
    ('ü', '}'),
    ('ß', '~'),
    ('Ä', '['),
    ('Ö', '\\'),
    ('Ü', ']'),
];

impl Charset {
    /// Apply this charset to a piece of free text
    pub fn apply(self, text: &str) -> String {
        match self {
            Charset::Passthrough => String::from(text),
            Charset::Extended => remap_extended(text),
        }
    }
}

/// Replace umlauts and sharp s with their single-byte sign codes
pub fn remap_extended(text: &str) -> String {
    text.chars()
        .map(|c| {
            EXTENDED_MAP
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_all_codes() {
        assert_eq!(remap_extended("äöüßÄÖÜ"), "{|}~[\\]");
    }

    #[test]
    fn test_remap_mixed_text() {
        assert_eq!(remap_extended("Münchner Straße"), "M}nchner Stra~e");
    }

    #[test]
    fn test_remap_shrinks_byte_length() {
        let text = "Grüß";
        let remapped = remap_extended(text);
        assert_eq!(text.len(), 6);
        assert_eq!(remapped.len(), 4);
        assert!(remapped.is_ascii());
    }

    #[test]
    fn test_passthrough_leaves_text() {
        assert_eq!(Charset::Passthrough.apply("Grüß"), "Grüß");
        assert_eq!(Charset::default(), Charset::Passthrough);
    }

    #[test]
    fn test_unmapped_characters_kept() {
        assert_eq!(remap_extended("Hbf é"), "Hbf é");
    }
}
