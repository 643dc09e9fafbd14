//! Test doubles shared by the encoder and raw transmitter tests

use alloc::vec::Vec;

use signbus_hal::{UartErrorKind, UartTx};

/// UART that records every write call
#[derive(Debug, Default)]
pub struct RecordingUart {
    /// All bytes accepted, in order
    pub written: Vec<u8>,
    /// Accepted bytes grouped per call
    pub writes: Vec<Vec<u8>>,
    /// Accept at most this many bytes per `write` call
    pub max_per_write: Option<usize>,
    /// Fail with `Disconnected` once this many calls have succeeded
    pub fail_after_writes: Option<usize>,
    pub ready: bool,
}

impl RecordingUart {
    pub fn new() -> Self {
        Self {
            ready: true,
            ..Self::default()
        }
    }

    /// Telegrams as sent by the encoder: three writes per telegram
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.writes.chunks(3).map(|parts| parts.concat()).collect()
    }

    fn check_fault(&self) -> Result<(), UartErrorKind> {
        match self.fail_after_writes {
            Some(limit) if self.writes.len() >= limit => Err(UartErrorKind::Disconnected),
            _ => Ok(()),
        }
    }

    fn record(&mut self, data: &[u8]) {
        self.written.extend_from_slice(data);
        self.writes.push(data.to_vec());
    }
}

impl UartTx for RecordingUart {
    type Error = UartErrorKind;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.check_fault()?;
        self.record(data);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        self.check_fault()?;
        let len = self.max_per_write.map_or(data.len(), |max| max.min(data.len()));
        self.record(&data[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn is_ready(&mut self) -> bool {
        self.ready
    }
}
