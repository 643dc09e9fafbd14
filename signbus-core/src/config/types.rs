//! Configuration type definitions

use alloc::string::String;

use serde::{Deserialize, Serialize};
use signbus_hal::UartConfig;
use signbus_protocol::DEFAULT_CHUNK_LEN;

/// Pause between the line and destination telegrams
pub const DEFAULT_COMMAND_GAP_MS: u32 = 200;

/// How long to wait for a sign UART to come up
pub const DEFAULT_READY_TIMEOUT_MS: u32 = 1000;

/// Complete device configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub ibis: IbisConfig,
    pub alfa: AlfaConfig,
    pub catalog: CatalogConfig,
}

/// IBIS sign settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IbisConfig {
    /// Serial framing, 1200 7E2 unless overridden
    pub uart: UartConfig,
    /// Remap umlauts onto the sign's 7-bit codes
    pub extended_charset: bool,
    /// Delay after each telegram of a route change
    pub command_gap_ms: u32,
    pub ready_timeout_ms: u32,
}

impl Default for IbisConfig {
    fn default() -> Self {
        Self {
            uart: UartConfig::ibis(),
            extended_charset: false,
            command_gap_ms: DEFAULT_COMMAND_GAP_MS,
            ready_timeout_ms: DEFAULT_READY_TIMEOUT_MS,
        }
    }
}

/// Alfa sign settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlfaConfig {
    pub uart: UartConfig,
    /// Bytes handed to the UART per write when streaming payloads
    pub chunk_len: usize,
    pub ready_timeout_ms: u32,
}

impl Default for AlfaConfig {
    fn default() -> Self {
        Self {
            uart: UartConfig::alfa(),
            chunk_len: DEFAULT_CHUNK_LEN,
            ready_timeout_ms: DEFAULT_READY_TIMEOUT_MS,
        }
    }
}

/// Where the route catalog lives on the file store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Route index listing buses and trams
    pub index_path: String,
    /// Directory of bus route records, with trailing slash
    pub bus_dir: String,
    /// Directory of tram route records, with trailing slash
    pub tram_dir: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            index_path: String::from("/index.json"),
            bus_dir: String::from("/buses/"),
            tram_dir: String::from("/trams/"),
        }
    }
}
