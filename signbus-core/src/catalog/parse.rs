//! JSON decoding of the index and route records

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer};

use super::model::{AlfaPayload, RouteIndex, RouteRecord};

/// Route record as stored on the file store
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RouteDocument {
    #[serde(deserialize_with = "text_or_number")]
    id: String,
    #[serde(deserialize_with = "text_or_number")]
    name: String,
    #[serde(deserialize_with = "text_or_number")]
    ibis_line_cmd: String,
    #[serde(deserialize_with = "text_or_number")]
    ibis_destination_cmd: String,
    alfa_sign_bytes: Option<Vec<i64>>,
    alfa_sign_bin_file: Option<String>,
}

impl From<RouteDocument> for RouteRecord {
    fn from(doc: RouteDocument) -> Self {
        // Inline bytes take precedence over a payload file
        let payload = match (doc.alfa_sign_bytes, doc.alfa_sign_bin_file) {
            (Some(bytes), _) if !bytes.is_empty() => {
                AlfaPayload::Inline(bytes.into_iter().map(|b| b as u8).collect())
            }
            (_, Some(file)) if !file.is_empty() => AlfaPayload::File(file),
            _ => AlfaPayload::None,
        };

        RouteRecord {
            id: doc.id,
            name: doc.name,
            line_command: doc.ibis_line_cmd,
            destination_command: doc.ibis_destination_cmd,
            payload,
        }
    }
}

/// Scalar that may be written either as a string or a bare number
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Accept `"7"` and `7` alike; `null` reads as empty text
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

/// Decode `/index.json`; missing arrays are empty
pub fn parse_index(json: &[u8]) -> Result<RouteIndex, serde_json::Error> {
    serde_json::from_slice(json)
}

/// Decode a route record
pub fn parse_route(json: &[u8]) -> Result<RouteRecord, serde_json::Error> {
    serde_json::from_slice::<RouteDocument>(json).map(RouteRecord::from)
}
