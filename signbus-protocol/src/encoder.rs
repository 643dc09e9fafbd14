//! IBIS telegram encoder
//!
//! Owns the IBIS UART and exposes one method per sign command. Every call
//! builds the content, then writes content, terminator and checksum to the
//! UART in that order.

use signbus_hal::UartTx;

use crate::charset::Charset;
use crate::checksum::TERMINATOR;
use crate::command::Command;

/// Sends IBIS commands over a UART
pub struct IbisEncoder<U> {
    uart: U,
    charset: Charset,
}

impl<U: UartTx> IbisEncoder<U> {
    /// Create an encoder with the extended charset disabled
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            charset: Charset::Passthrough,
        }
    }

    /// Enable or disable the umlaut remap for free-text commands
    pub fn with_extended_charset(mut self, enabled: bool) -> Self {
        self.charset = if enabled {
            Charset::Extended
        } else {
            Charset::Passthrough
        };
        self
    }

    /// Charset applied to free-text commands
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Encode and transmit one command
    ///
    /// Returns the number of bytes put on the wire. A UART fault is returned
    /// as-is; nothing is retried.
    pub fn send(&mut self, command: &Command<'_>) -> Result<usize, U::Error> {
        let telegram = command.to_telegram(self.charset);

        self.uart.write_blocking(telegram.content().as_bytes())?;
        self.uart.write_blocking(&[TERMINATOR])?;
        self.uart.write_blocking(&[telegram.checksum()])?;

        Ok(telegram.len())
    }

    /// Set line number
    pub fn set_line(&mut self, line: u16) -> Result<usize, U::Error> {
        self.send(&Command::Line(line))
    }

    /// Set destination number
    pub fn set_destination(&mut self, dest: u16) -> Result<usize, U::Error> {
        self.send(&Command::Destination(dest))
    }

    /// Set display cycle
    pub fn set_cycle(&mut self, cycle: u8) -> Result<usize, U::Error> {
        self.send(&Command::Cycle(cycle))
    }

    /// Set clock, usually as `HHmm`
    pub fn set_time(&mut self, hhmm: &str) -> Result<usize, U::Error> {
        self.send(&Command::Time(hhmm))
    }

    /// Set free text
    pub fn set_text(&mut self, text: &str) -> Result<usize, U::Error> {
        self.send(&Command::Text(text))
    }

    /// Set complex/menu text
    pub fn set_complex_text(&mut self, text: &str) -> Result<usize, U::Error> {
        self.send(&Command::ComplexText(text))
    }

    /// Set announcer symbol
    pub fn set_symbol(&mut self, number: &str) -> Result<usize, U::Error> {
        self.send(&Command::Symbol(number))
    }

    /// Set multi-block text; block layout is handled here
    pub fn set_multi_block_text(&mut self, address: &str, text: &str) -> Result<usize, U::Error> {
        self.send(&Command::MultiBlockText { address, text })
    }

    /// Check whether the UART accepts data
    pub fn is_ready(&mut self) -> bool {
        self.uart.is_ready()
    }

    /// Borrow the UART
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Release the UART
    pub fn into_inner(self) -> U {
        self.uart
    }
}
