//! UART serial communication abstractions
//!
//! Provides the transmit-side trait both sign buses are driven through,
//! plus the serial frame configuration each bus expects.

use embedded_hal::delay::DelayNs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a transmit fault
///
/// Implementation-specific error types map onto these kinds so that code
/// above the HAL can report faults without knowing the concrete UART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartErrorKind {
    /// Peripheral not initialised or not accepting data
    NotReady,
    /// Outbound buffer overflowed
    Overrun,
    /// Line or device disconnected
    Disconnected,
    /// Write did not complete in time
    Timeout,
    /// Anything else
    Other,
}

/// Error type bound for [`UartTx`] implementations
pub trait UartError: core::fmt::Debug {
    /// Map this error to a generic kind
    fn kind(&self) -> UartErrorKind;
}

impl UartError for UartErrorKind {
    fn kind(&self) -> UartErrorKind {
        *self
    }
}

impl UartError for core::convert::Infallible {
    fn kind(&self) -> UartErrorKind {
        match *self {}
    }
}

/// UART transmitter
///
/// Blocking trait for sending data over a UART interface. Each sign bus owns
/// exactly one transmitter; no two writers share one.
pub trait UartTx {
    /// Error type for transmit operations
    type Error: UartError;

    /// Write all of `data` to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write as much of `data` as the UART accepts
    ///
    /// Returns the number of bytes accepted, which may be less than
    /// `data.len()` if the outbound buffer filled up.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        self.write_blocking(data)?;
        Ok(data.len())
    }

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Check whether the UART is initialised and accepting data
    fn is_ready(&mut self) -> bool;
}

impl<T: UartTx + ?Sized> UartTx for &mut T {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_blocking(self, data)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        T::write(self, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }

    fn is_ready(&mut self) -> bool {
        T::is_ready(self)
    }
}

/// A UART did not become ready within the allowed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadyTimeout {
    /// Milliseconds spent waiting before giving up
    pub waited_ms: u32,
}

/// Wait up to `timeout_ms` for a UART to report ready
///
/// Polls [`UartTx::is_ready`] once per millisecond. Returns immediately
/// without delaying if the UART is already ready.
pub fn wait_ready<U, D>(uart: &mut U, delay: &mut D, timeout_ms: u32) -> Result<(), ReadyTimeout>
where
    U: UartTx + ?Sized,
    D: DelayNs,
{
    let mut waited_ms = 0;
    while !uart.is_ready() {
        if waited_ms >= timeout_ms {
            return Err(ReadyTimeout { waited_ms });
        }
        delay.delay_ms(1);
        waited_ms += 1;
    }
    Ok(())
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// IBIS bus framing: 1200 baud, 7 data bits, even parity, 2 stop bits
    pub const fn ibis() -> Self {
        Self {
            baudrate: 1200,
            data_bits: DataBits::Seven,
            parity: Parity::Even,
            stop_bits: StopBits::Two,
        }
    }

    /// Usual Alfa bus framing: 19200 baud, 8N1
    pub const fn alfa() -> Self {
        Self {
            baudrate: 19200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StopBits {
    One,
    Two,
}
