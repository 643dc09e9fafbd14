//! Route catalog and sign dispatch for the destination sign controller
//!
//! This crate contains the application logic that sits between the board
//! support code and the sign protocols:
//!
//! - Device configuration parsed from TOML
//! - Route catalog read from the on-board file system
//! - Route selection state
//! - Dispatch of a selected route to the IBIS or Alfa sign
//!
//! Hardware is reached only through the `signbus-hal` traits, so the whole
//! crate runs on the host against in-memory stores and recording UARTs.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod app;
pub mod catalog;
pub mod config;
mod store;

pub use app::{AppContext, ApplyError, ApplyReport, Selection, SignTarget};
pub use catalog::{
    parse_decimal, AlfaPayload, Catalog, CatalogError, RouteCategory, RouteEntry, RouteIndex,
    RouteKey, RouteRecord,
};
pub use config::{load_config, parse_config, ConfigError, DeviceConfig};
