//! Alfa raw pass-through
//!
//! Alfa signs receive pre-rendered binary payloads. Bytes are forwarded
//! untouched: no framing, no checksum, no charset handling. Large payloads
//! are written in fixed-size chunks so the UART buffer is never asked to
//! take more than it can hold at once.

use signbus_hal::UartTx;

/// Chunk size used when streaming payloads
pub const DEFAULT_CHUNK_LEN: usize = 64;

/// Forwards raw bytes to an Alfa sign
pub struct RawTransmitter<U> {
    uart: U,
    chunk_len: usize,
}

impl<U: UartTx> RawTransmitter<U> {
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }

    /// Override the chunk size (at least 1)
    pub fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len.max(1);
        self
    }

    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Send `data` unchanged
    ///
    /// Returns how many bytes the UART accepted. Transmission stops at the
    /// first chunk the UART only partly accepts, so a result below
    /// `data.len()` means the tail was not sent.
    pub fn send_raw(&mut self, data: &[u8]) -> Result<usize, U::Error> {
        let mut sent = 0;
        for chunk in data.chunks(self.chunk_len) {
            let accepted = self.uart.write(chunk)?;
            sent += accepted;
            if accepted < chunk.len() {
                break;
            }
        }
        Ok(sent)
    }

    /// Check whether the UART accepts data
    pub fn is_ready(&mut self) -> bool {
        self.uart.is_ready()
    }

    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    pub fn into_inner(self) -> U {
        self.uart
    }
}
