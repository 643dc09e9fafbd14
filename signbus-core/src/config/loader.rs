//! Configuration loading
//!
//! Reads the TOML configuration from the file store and validates it.

use core::str;

use signbus_hal::{FileStore, StorageError};

use super::types::DeviceConfig;
use crate::store::read_to_vec;

/// Maximum TOML config size
pub const MAX_CONFIG_SIZE: usize = 8192;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// File store read failed
    Storage(StorageError),
    /// Invalid UTF-8 in TOML data
    InvalidUtf8,
    /// TOML parsing failed
    TomlParse,
    /// A value is out of range; names the offending key
    Invalid(&'static str),
}

impl From<StorageError> for ConfigError {
    fn from(e: StorageError) -> Self {
        ConfigError::Storage(e)
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(text: &str) -> Result<DeviceConfig, ConfigError> {
    let config: DeviceConfig = toml::from_str(text).map_err(|_e| {
        warn!("TOML parse error: {}", defmt::Debug2Format(&_e));
        ConfigError::TomlParse
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load the configuration file at `path`
///
/// A missing file is reported as `Storage(NotFound)`; callers that want to
/// run on defaults can match on it.
pub fn load_config<S: FileStore + ?Sized>(
    store: &mut S,
    path: &str,
) -> Result<DeviceConfig, ConfigError> {
    info!("Loading configuration from {}", path);

    let data = read_to_vec(store, path, MAX_CONFIG_SIZE)?;
    debug!("Read {} bytes of TOML", data.len());

    let text = str::from_utf8(&data).map_err(|_| ConfigError::InvalidUtf8)?;
    let config = parse_config(text)?;

    log_config_summary(&config);
    Ok(config)
}

fn validate(config: &DeviceConfig) -> Result<(), ConfigError> {
    if config.ibis.uart.baudrate == 0 {
        return Err(ConfigError::Invalid("ibis.uart.baudrate"));
    }
    if config.alfa.uart.baudrate == 0 {
        return Err(ConfigError::Invalid("alfa.uart.baudrate"));
    }
    if config.alfa.chunk_len == 0 {
        return Err(ConfigError::Invalid("alfa.chunk_len"));
    }
    Ok(())
}

fn log_config_summary(_config: &DeviceConfig) {
    info!("Configuration loaded");
    debug!(
        "  IBIS {} baud, extended charset {}",
        _config.ibis.uart.baudrate,
        _config.ibis.extended_charset
    );
    debug!(
        "  Alfa {} baud, {} byte chunks",
        _config.alfa.uart.baudrate,
        _config.alfa.chunk_len
    );
    debug!("  catalog index {}", _config.catalog.index_path.as_str());
}
