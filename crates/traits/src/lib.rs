//! Core checksum traits for the CRC-64/ISO workspace.
//!
//! This crate provides the interface every checksum engine in the workspace
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Streaming checksum over byte sequences |
//! | [`ChecksumCombine`] | `crc(A \|\| B)` from `crc(A)`, `crc(B)` and `len(B)` |
//!
//! With the `std` feature, [`io::ChecksumReader`] and [`io::ChecksumWriter`]
//! fold every byte that passes through a [`std::io::Read`] or
//! [`std::io::Write`] into a checksum.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
