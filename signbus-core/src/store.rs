//! Whole-file reads on top of [`FileStore`]

use alloc::vec::Vec;

use signbus_hal::{FileStore, StorageError};

/// Read size per `read_at` call
const READ_CHUNK: usize = 256;

/// Read an entire file into memory
///
/// Fails with [`StorageError::TooLarge`] once more than `limit` bytes have
/// been read.
pub(crate) fn read_to_vec<S: FileStore + ?Sized>(
    store: &mut S,
    path: &str,
    limit: usize,
) -> Result<Vec<u8>, StorageError> {
    let mut data = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = store.read_at(path, data.len(), &mut chunk)?;
        if n == 0 {
            return Ok(data);
        }
        if data.len() + n > limit {
            return Err(StorageError::TooLarge);
        }
        data.extend_from_slice(&chunk[..n]);
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_reads_across_chunks() {
        let contents: Vec<u8> = (0..1000u32).map(|i| i as u8).collect();
        let mut store = MemoryStore::new().with_file("/blob.bin", &contents);

        let data = read_to_vec(&mut store, "/blob.bin", 4096).unwrap();
        assert_eq!(data, contents);
        // 3 full chunks, one partial, one end-of-file
        assert_eq!(store.reads, 5);
    }

    #[test]
    fn test_empty_file() {
        let mut store = MemoryStore::new().with_file("/empty", b"");
        assert_eq!(read_to_vec(&mut store, "/empty", 16), Ok(Vec::new()));
    }

    #[test]
    fn test_missing_file() {
        let mut store = MemoryStore::new();
        assert_eq!(
            read_to_vec(&mut store, "/index.json", 16),
            Err(StorageError::NotFound)
        );
    }

    #[test]
    fn test_limit() {
        let mut store = MemoryStore::new().with_file("/big", [0u8; 300]);
        assert_eq!(
            read_to_vec(&mut store, "/big", 299),
            Err(StorageError::TooLarge)
        );
        assert!(read_to_vec(&mut store, "/big", 300).is_ok());
    }
}
