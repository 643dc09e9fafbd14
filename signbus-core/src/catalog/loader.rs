//! Catalog access on top of a file store

use alloc::string::String;

use signbus_hal::{FileStore, StorageError};

use super::model::{RouteCategory, RouteEntry, RouteIndex, RouteKey, RouteRecord};
use super::parse::{parse_index, parse_route};
use crate::config::CatalogConfig;
use crate::store::read_to_vec;

/// Maximum index file size
pub const MAX_INDEX_SIZE: usize = 16 * 1024;

/// Maximum route record size, inline payload included
pub const MAX_ROUTE_SIZE: usize = 32 * 1024;

/// Extension of route record files
const RECORD_EXTENSION: &str = ".json";

/// Catalog errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// File store read failed
    Storage(StorageError),
    /// Index or record is not valid JSON of the expected shape
    Json,
    /// Route is not listed in the index
    UnknownRoute,
}

impl From<StorageError> for CatalogError {
    fn from(e: StorageError) -> Self {
        CatalogError::Storage(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(_: serde_json::Error) -> Self {
        CatalogError::Json
    }
}

/// Route catalog
///
/// Holds the index read at load time. Records and payloads are read from the
/// store on demand, so the index is the only catalog data kept in memory.
pub struct Catalog<S> {
    store: S,
    index: RouteIndex,
    config: CatalogConfig,
}

impl<S: FileStore> Catalog<S> {
    /// Read the index and build the catalog
    pub fn load(mut store: S, config: &CatalogConfig) -> Result<Self, CatalogError> {
        info!("Loading route index from {}", config.index_path.as_str());

        let data = read_to_vec(&mut store, &config.index_path, MAX_INDEX_SIZE)?;
        let index = parse_index(&data).map_err(|_e| {
            warn!("Route index is invalid: {}", defmt::Debug2Format(&_e));
            CatalogError::Json
        })?;

        info!(
            "Route index loaded: {} buses, {} trams",
            index.buses.len(),
            index.trams.len()
        );

        Ok(Self {
            store,
            index,
            config: config.clone(),
        })
    }

    pub fn index(&self) -> &RouteIndex {
        &self.index
    }

    /// Index entries for one category, in file order
    pub fn entries(&self, category: RouteCategory) -> &[RouteEntry] {
        self.index.entries(category)
    }

    /// Look up the index entry for `key`
    pub fn find(&self, key: &RouteKey) -> Option<&RouteEntry> {
        self.entries(key.category)
            .iter()
            .find(|entry| entry.file == key.file)
    }

    /// Path of the record file for `key`
    pub fn record_path(&self, key: &RouteKey) -> String {
        let mut path = String::from(key.category.dir(&self.config));
        path.push_str(&key.file);
        path.push_str(RECORD_EXTENSION);
        path
    }

    /// Path of an Alfa payload file referenced by a record
    pub fn payload_path(&self, category: RouteCategory, file: &str) -> String {
        let mut path = String::from(category.dir(&self.config));
        path.push_str(file);
        path
    }

    /// Read and decode the record for an indexed route
    pub fn read_route(&mut self, key: &RouteKey) -> Result<RouteRecord, CatalogError> {
        if self.find(key).is_none() {
            warn!("Route {} is not in the index", key.file.as_str());
            return Err(CatalogError::UnknownRoute);
        }

        let path = self.record_path(key);
        debug!("Reading route record {}", path.as_str());

        let data = read_to_vec(&mut self.store, &path, MAX_ROUTE_SIZE)?;
        let record = parse_route(&data).map_err(|_e| {
            warn!("Route record {} is invalid: {}", path.as_str(), defmt::Debug2Format(&_e));
            CatalogError::Json
        })?;
        Ok(record)
    }

    /// Open a payload file for streaming
    pub fn open_payload(
        &mut self,
        category: RouteCategory,
        file: &str,
    ) -> Result<PayloadReader<'_, S>, CatalogError> {
        let path = self.payload_path(category, file);
        if !self.store.exists(&path) {
            warn!("Payload file not found: {}", path.as_str());
            return Err(CatalogError::Storage(StorageError::NotFound));
        }
        Ok(PayloadReader {
            store: &mut self.store,
            path,
            offset: 0,
        })
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Sequential reader over a payload file
pub struct PayloadReader<'a, S> {
    store: &'a mut S,
    path: String,
    offset: usize,
}

impl<S: FileStore> PayloadReader<'_, S> {
    /// Read the next piece of the file; 0 at end of file
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<usize, CatalogError> {
        let n = self.store.read_at(&self.path, self.offset, buffer)?;
        self.offset += n;
        Ok(n)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bytes read so far
    pub fn offset(&self) -> usize {
        self.offset
    }
}
