//! Device configuration
//!
//! Serial parameters, dispatch timing and catalog locations, read from a
//! TOML file on the device. Every key is optional.

pub mod loader;
pub mod types;

pub use loader::{load_config, parse_config, ConfigError, MAX_CONFIG_SIZE};
pub use types::*;
