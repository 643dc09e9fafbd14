//! IBIS Telegram Protocol
//!
//! This crate turns destination sign commands into the exact bytes a sign
//! expects on the wire. Two buses are supported:
//!
//! - **IBIS**: a framed 7-bit text protocol (1200 baud, 7E2). Every command
//!   is sent as one telegram.
//! - **Alfa**: a binary bus whose payloads are rendered elsewhere. This crate
//!   only passes them through unchanged.
//!
//! # Telegram Format
//!
//! ```text
//! ┌──────────────────────────┬────┬──────────┐
//! │ CONTENT                  │ CR │ CHECKSUM │
//! │ command code + arguments │ 1B │ 1B       │
//! └──────────────────────────┴────┴──────────┘
//! ```
//!
//! The checksum is `0x7F` XOR every content byte XOR the `0x0D` terminator.
//! The terminator is folded into the seed (`0x72`), so only content bytes
//! are hashed at send time.
//!
//! # Commands
//!
//! | Command | Content |
//! |---|---|
//! | line | `l` + 3-digit number |
//! | destination | `z` + 3-digit number |
//! | cycle | `xC` + number |
//! | time | `u` + time string |
//! | text | `v` + text |
//! | complex text | `zM ` + text |
//! | symbol | `lE0` + number |
//! | multi-block text | `aA` + address + block count + `A0` + padded text |

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod charset;
pub mod checksum;
pub mod command;
pub mod encoder;
pub mod format;
pub mod multiblock;
pub mod raw;
pub mod telegram;

#[cfg(test)]
mod testing;

pub use charset::Charset;
pub use checksum::{checksum, CHECKSUM_SEED, CHECKSUM_SENTINEL, TERMINATOR};
pub use command::Command;
pub use encoder::IbisEncoder;
pub use multiblock::{MultiBlockText, BLOCK_LEN};
pub use raw::{RawTransmitter, DEFAULT_CHUNK_LEN};
pub use telegram::{verify, Telegram, TelegramError};
