//! Batch generation of CRC-64/ISO checksum files.
//!
//! For every source file a `<name>.crc` file is written holding exactly the
//! 16 uppercase hex digits of its CRC-64/ISO checksum, no newline.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`GenerationBatch`] | Elements sharing a [`Destination`], run sequentially |
//! | [`GenerationElement`] | Source, `.crc` path, [`GenerationStatus`], error description |
//! | [`Destination`] | Same directory, sibling `../CRC`, or a custom directory |
//! | [`verify()`] | Compare an existing `.crc` file with its source |
//! | [`source`] | List extensions and select files in a directory |
//!
//! # Example
//!
//! ```rust,no_run
//! use crcgen::{Destination, GenerationBatch, GenerationStatus};
//!
//! let mut batch = GenerationBatch::new(["data/a.bin", "data/b.bin"], Destination::CrcDirectory);
//! if batch.is_valid() {
//!   let report = batch.run(&mut |id: u64, status: GenerationStatus| println!("{id}: {status}"));
//!   assert!(report.is_success());
//! }
//! ```
//!
//! Progress is reported through the `log` facade under the `crcgen` target.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod batch;
pub mod destination;
mod element;
mod error;
pub mod source;
mod verify;

pub use batch::{BatchReport, GENERATION_ERROR_PREFIX, GenerationBatch, StatusListener, generate};
pub use destination::{CRC_DIR_RELATIVE_PATH, CRC_FILE_EXTENSION, Destination};
pub use element::{GenerationElement, GenerationStatus};
pub use error::GenerationError;
pub use verify::{Verification, verify};
