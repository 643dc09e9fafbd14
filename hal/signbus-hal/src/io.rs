//! `embedded-io` adapter
//!
//! Lets any blocking `embedded_io` writer (a chip HAL's UART driver, a USB
//! serial port, a host-side serial device) act as a [`UartTx`].

use embedded_io::{ErrorKind, Write, WriteReady};

use crate::uart::{UartError, UartErrorKind, UartTx};

/// Errors raised by [`IoUart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoUartError<E> {
    /// The underlying writer failed
    Io(E),
    /// The writer accepted zero bytes of a non-empty buffer
    WriteZero,
}

impl<E: embedded_io::Error> UartError for IoUartError<E> {
    fn kind(&self) -> UartErrorKind {
        match self {
            IoUartError::Io(e) => match e.kind() {
                ErrorKind::NotConnected
                | ErrorKind::BrokenPipe
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted => UartErrorKind::Disconnected,
                ErrorKind::TimedOut => UartErrorKind::Timeout,
                _ => UartErrorKind::Other,
            },
            IoUartError::WriteZero => UartErrorKind::Overrun,
        }
    }
}

/// [`UartTx`] wrapper around an `embedded_io` writer
pub struct IoUart<W> {
    inner: W,
}

impl<W> IoUart<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped writer
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Unwrap and return the writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + WriteReady> UartTx for IoUart<W> {
    type Error = IoUartError<W::Error>;

    fn write_blocking(&mut self, mut data: &[u8]) -> Result<(), Self::Error> {
        while !data.is_empty() {
            let n = self.inner.write(data).map_err(IoUartError::Io)?;
            if n == 0 {
                return Err(IoUartError::WriteZero);
            }
            data = &data[n..];
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        if data.is_empty() {
            return Ok(0);
        }
        self.inner.write(data).map_err(IoUartError::Io)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush().map_err(IoUartError::Io)
    }

    fn is_ready(&mut self) -> bool {
        // A writer that cannot answer is treated as not ready
        self.inner.write_ready().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::ErrorType;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError(ErrorKind);

    impl embedded_io::Error for MockError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Writer that accepts at most `max_per_write` bytes per call
    struct TrickleWriter {
        written: Vec<u8>,
        max_per_write: usize,
        ready: bool,
        fail_with: Option<ErrorKind>,
    }

    impl TrickleWriter {
        fn new(max_per_write: usize) -> Self {
            Self {
                written: Vec::new(),
                max_per_write,
                ready: true,
                fail_with: None,
            }
        }
    }

    impl ErrorType for TrickleWriter {
        type Error = MockError;
    }

    impl Write for TrickleWriter {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            if let Some(kind) = self.fail_with {
                return Err(MockError(kind));
            }
            let n = buf.len().min(self.max_per_write);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl WriteReady for TrickleWriter {
        fn write_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(self.ready)
        }
    }

    #[test]
    fn test_write_blocking_loops_over_short_writes() {
        let mut uart = IoUart::new(TrickleWriter::new(3));
        uart.write_blocking(b"l007\r\x45").unwrap();
        assert_eq!(uart.inner().written, b"l007\r\x45");
    }

    #[test]
    fn test_write_reports_short_write() {
        let mut uart = IoUart::new(TrickleWriter::new(3));
        assert_eq!(uart.write(b"abcdef"), Ok(3));
        assert_eq!(uart.into_inner().written, b"abc");
    }

    #[test]
    fn test_write_zero_is_an_error() {
        let mut uart = IoUart::new(TrickleWriter::new(0));
        let err = uart.write_blocking(b"x").unwrap_err();
        assert_eq!(err, IoUartError::WriteZero);
        assert_eq!(err.kind(), UartErrorKind::Overrun);
    }

    #[test]
    fn test_error_kind_mapping() {
        let mut writer = TrickleWriter::new(8);
        writer.fail_with = Some(ErrorKind::BrokenPipe);
        let mut uart = IoUart::new(writer);
        let err = uart.write_blocking(b"x").unwrap_err();
        assert_eq!(err.kind(), UartErrorKind::Disconnected);

        let timeout = IoUartError::Io(MockError(ErrorKind::TimedOut));
        assert_eq!(timeout.kind(), UartErrorKind::Timeout);

        let other = IoUartError::Io(MockError(ErrorKind::InvalidData));
        assert_eq!(other.kind(), UartErrorKind::Other);
    }

    #[test]
    fn test_readiness_follows_writer() {
        let mut writer = TrickleWriter::new(8);
        writer.ready = false;
        let mut uart = IoUart::new(writer);
        assert!(!uart.is_ready());
    }
}
