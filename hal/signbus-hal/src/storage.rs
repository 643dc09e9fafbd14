//! File storage abstractions
//!
//! Read-only access to the on-board file system holding the route catalog
//! (`/index.json`, per-route detail records) and pre-rendered Alfa payloads.

/// Errors from file storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// File system not mounted or read failed
    Io,
    /// No file at the given path
    NotFound,
    /// Data corrupted or invalid
    Corrupted,
    /// File larger than the buffer it is read into
    TooLarge,
}

/// File store trait
///
/// Implementations wrap whatever file system the board mounts (LittleFS,
/// FAT on SD card, a directory on the host). Reads are synchronous.
pub trait FileStore {
    /// Read from `path` starting at byte `offset` into `buffer`
    ///
    /// # Returns
    /// The number of bytes read; 0 once `offset` reaches the end of the file.
    fn read_at(
        &mut self,
        path: &str,
        offset: usize,
        buffer: &mut [u8],
    ) -> Result<usize, StorageError>;

    /// Check if a file exists
    fn exists(&mut self, path: &str) -> bool;
}

impl<T: FileStore + ?Sized> FileStore for &mut T {
    fn read_at(
        &mut self,
        path: &str,
        offset: usize,
        buffer: &mut [u8],
    ) -> Result<usize, StorageError> {
        T::read_at(self, path, offset, buffer)
    }

    fn exists(&mut self, path: &str) -> bool {
        T::exists(self, path)
    }
}
