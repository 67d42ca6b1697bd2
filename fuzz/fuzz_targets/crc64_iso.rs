//! Fuzz target for CRC-64/ISO.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Incremental updates produce same result as one-shot
//! - Resume and combine produce correct results
//! - The hex rendering parses back to the same register

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, ChecksumCombine, Crc64Iso, HexChecksum};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Crc64Iso::checksum(data);

  let (a, b) = data.split_at(split);
  let mut hasher = Crc64Iso::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(oneshot, hasher.finalize(), "crc64-iso incremental mismatch");

  let crc_a = Crc64Iso::checksum(a);
  let mut resumed = Crc64Iso::resume(crc_a);
  resumed.update(b);
  assert_eq!(oneshot, resumed.finalize(), "crc64-iso resume mismatch");

  let combined = Crc64Iso::combine(crc_a, Crc64Iso::checksum(b), b.len());
  assert_eq!(oneshot, combined, "crc64-iso combine mismatch");

  let hex = hasher.hex();
  assert_eq!(HexChecksum::parse(hex.as_str()), Some(hasher.register()), "hex round trip");
});
