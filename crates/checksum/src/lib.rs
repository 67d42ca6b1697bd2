//! CRC-64/ISO-3309 checksums.
//!
//! This crate computes the 64-bit CRC of ISO 3309 (HDLC), polynomial
//! x⁶⁴ + x⁴ + x³ + x + 1, reflected, initial value 0, no final XOR, and
//! renders it as 16 uppercase hex digits.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Crc64Iso`] | Streaming hasher ([`Checksum`], [`ChecksumCombine`]) |
//! | [`Register`] | The accumulator as two 32-bit words |
//! | [`HexChecksum`] | Fixed 16-character rendering, parse back with [`HexChecksum::parse`] |
//! | [`SPLIT_TABLES`] | Compile-time lookup tables |
//! | [`compute`] | Checksum a buffer, string, reader or file (`std`) |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, ChecksumCombine, Crc64Iso};
//!
//! // One-shot computation
//! let data = b"123456789";
//! let crc = Crc64Iso::checksum(data);
//! assert_eq!(crc, 0x46A5_A938_8A5B_EFFE);
//! assert_eq!(Crc64Iso::hex_of(data), "46A5A9388A5BEFFE");
//!
//! // Streaming computation
//! let mut hasher = Crc64Iso::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Parallel combine
//! let (a, b) = data.split_at(4);
//! let combined = Crc64Iso::combine(Crc64Iso::checksum(a), Crc64Iso::checksum(b), b.len());
//! assert_eq!(combined, crc);
//! ```
//!
//! # no_std Support
//!
//! The hasher, tables and formatting work without `std`. Disable the default
//! feature for embedded use; the `compute` family and [`ChecksumError`] need it.
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;
mod crc64;
mod hex;
mod register;

#[cfg(feature = "std")]
mod compute;
#[cfg(feature = "std")]
mod error;

/// Kernel entry points, exposed for the integration tests, benches and fuzzers.
#[doc(hidden)]
pub mod __internal {
  pub use crate::crc64::kernels::{ALL as KERNELS, Crc64Fn, reference, slice8, split_word};
}

pub use common::tables::{BIT32_MSB, POLY_REVERSED_HIGH, SPLIT_TABLES, SplitTables};
#[cfg(feature = "std")]
pub use compute::{ByteSource, compute, compute_file, compute_reader, compute_str};
pub use crc64::{Crc64Iso, Crc64IsoConfig, Crc64IsoForce};
#[cfg(feature = "std")]
pub use error::{ChecksumError, ChecksumErrorKind};
pub use hex::{HexChecksum, format};
pub use register::Register;
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};
