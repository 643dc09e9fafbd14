//! Signbus Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the sign controller talks through.
//! Board support code implements these traits for its UARTs and its file
//! system; everything above (telegram encoding, route dispatch) is written
//! against the traits only.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  signbus-core (catalog, dispatch)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  signbus-protocol (IBIS telegrams, raw) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  signbus-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  IBIS UART    │       │  Alfa UART    │
//! │  1200 7E2     │       │  19200 8N1    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Byte-oriented serial transmitter with readiness query
//! - [`uart::UartError`] - Error kind classification for transmit faults
//! - [`storage::FileStore`] - Read-only file access for catalog and payloads
//!
//! [`io::IoUart`] adapts any `embedded-io` writer into a [`uart::UartTx`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod io;
pub mod storage;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use io::IoUart;
pub use storage::{FileStore, StorageError};
pub use uart::{
    wait_ready, DataBits, Parity, ReadyTimeout, StopBits, UartConfig, UartError, UartErrorKind,
    UartTx,
};
