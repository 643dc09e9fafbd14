//! Catalog data model

use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::config::CatalogConfig;

/// Route family; each has its own record directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouteCategory {
    Bus,
    Tram,
}

impl RouteCategory {
    pub const ALL: [RouteCategory; 2] = [RouteCategory::Bus, RouteCategory::Tram];

    /// Directory holding this category's records and payloads
    pub fn dir(self, config: &CatalogConfig) -> &str {
        match self {
            RouteCategory::Bus => &config.bus_dir,
            RouteCategory::Tram => &config.tram_dir,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteCategory::Bus => "bus",
            RouteCategory::Tram => "tram",
        }
    }
}

/// One line of the route index
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RouteEntry {
    /// Label shown to the operator
    pub name: String,
    /// Record file name without directory or extension
    pub file: String,
}

/// Parsed `/index.json`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RouteIndex {
    pub buses: Vec<RouteEntry>,
    pub trams: Vec<RouteEntry>,
}

impl RouteIndex {
    pub fn entries(&self, category: RouteCategory) -> &[RouteEntry] {
        match category {
            RouteCategory::Bus => &self.buses,
            RouteCategory::Tram => &self.trams,
        }
    }

    pub fn len(&self) -> usize {
        self.buses.len() + self.trams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stable identifier of a route across catalog reloads
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub category: RouteCategory,
    pub file: String,
}

impl RouteKey {
    pub fn new(category: RouteCategory, file: impl Into<String>) -> Self {
        Self {
            category,
            file: file.into(),
        }
    }
}

/// Alfa payload of a route
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlfaPayload {
    /// Route has no Alfa data
    #[default]
    None,
    /// Bytes stored inline in the record
    Inline(Vec<u8>),
    /// Binary file in the category directory
    File(String),
}

/// Parsed route record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteRecord {
    pub id: String,
    pub name: String,
    /// Line number as stored, decimal text
    pub line_command: String,
    /// Destination number as stored, decimal text
    pub destination_command: String,
    pub payload: AlfaPayload,
}

impl RouteRecord {
    /// Line number to send, see [`parse_decimal`]
    pub fn line(&self) -> u16 {
        parse_decimal(&self.line_command)
    }

    /// Destination number to send, see [`parse_decimal`]
    pub fn destination(&self) -> u16 {
        parse_decimal(&self.destination_command)
    }
}

/// Permissive decimal parse
///
/// Skips leading whitespace, accepts one optional sign and then reads digits
/// up to the first non-digit. Text without digits yields 0. Values outside
/// the `u16` range wrap modulo 2^16, so `"-1"` becomes 65535.
pub fn parse_decimal(text: &str) -> u16 {
    let mut bytes = text.trim_start().bytes().peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut value: u16 = 0;
    for b in bytes {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add((b - b'0') as u16);
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("7"), 7);
        assert_eq!(parse_decimal("042"), 42);
        assert_eq!(parse_decimal("  15"), 15);
        assert_eq!(parse_decimal("+3"), 3);
    }

    #[test]
    fn test_parse_decimal_stops_at_garbage() {
        assert_eq!(parse_decimal("12abc"), 12);
        assert_eq!(parse_decimal("5 6"), 5);
        assert_eq!(parse_decimal("N7"), 0);
        assert_eq!(parse_decimal(""), 0);
        assert_eq!(parse_decimal("-"), 0);
        assert_eq!(parse_decimal("null"), 0);
    }

    #[test]
    fn test_parse_decimal_wraps() {
        assert_eq!(parse_decimal("-1"), 65535);
        assert_eq!(parse_decimal("65536"), 0);
        assert_eq!(parse_decimal("70000"), 4464);
    }

    #[test]
    fn test_category_dirs() {
        let config = CatalogConfig::default();
        assert_eq!(RouteCategory::Bus.dir(&config), "/buses/");
        assert_eq!(RouteCategory::Tram.dir(&config), "/trams/");
    }

    #[test]
    fn test_record_numbers() {
        let record = RouteRecord {
            line_command: String::from("12"),
            destination_command: String::from(" 305x"),
            ..RouteRecord::default()
        };
        assert_eq!(record.line(), 12);
        assert_eq!(record.destination(), 305);
    }

    proptest! {
        #[test]
        fn prop_parse_decimal_matches_u16(value: u16) {
            prop_assert_eq!(parse_decimal(&value.to_string()), value);
        }

        #[test]
        fn prop_parse_decimal_wraps_like_integer_cast(value in 0u32..10_000_000) {
            prop_assert_eq!(parse_decimal(&value.to_string()), value as u16);
        }
    }
}
