//! Route catalog
//!
//! The file store holds an index of bus and tram routes plus one JSON
//! record per route:
//!
//! ```text
//! /index.json             {"buses":[{"name","file"}], "trams":[...]}
//! /buses/<file>.json      route record
//! /trams/<file>.json      route record
//! /buses/<bin file>       pre-rendered Alfa payload (optional)
//! ```

pub mod loader;
pub mod model;
pub mod parse;

pub use loader::{Catalog, CatalogError, PayloadReader, MAX_INDEX_SIZE, MAX_ROUTE_SIZE};
pub use model::{
    parse_decimal, AlfaPayload, RouteCategory, RouteEntry, RouteIndex, RouteKey, RouteRecord,
};
pub use parse::{parse_index, parse_route};
