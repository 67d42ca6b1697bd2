//! Basic checksum usage: one-shot, streaming, resume and file APIs.
//!
//! Run with: `cargo run --example basic -p checksum`

use std::io::Cursor;

use checksum::{ByteSource, Checksum, ChecksumCombine, Crc64Iso, HexChecksum, compute, compute_str};

fn main() -> Result<(), checksum::ChecksumError> {
  println!("=== CRC-64/ISO Basic Examples ===\n");

  one_shot_examples()?;
  streaming_example();
  resume_example();
  combine_example();

  Ok(())
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot_examples() -> Result<(), checksum::ChecksumError> {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let crc = Crc64Iso::checksum(data);
  println!("CRC-64/ISO:       0x{crc:016X}");
  assert_eq!(crc, 0x46A5_A938_8A5B_EFFE);

  // The 16-digit form written to .crc files
  let hex = Crc64Iso::hex_of(data);
  println!("Hex:              {hex}");

  // Same result through the source-agnostic entry point
  assert_eq!(compute_str(Some("123456789"))?, hex);
  let mut reader = Cursor::new(data.to_vec());
  assert_eq!(compute(Some(ByteSource::Reader(&mut reader)))?, hex);

  // And back
  assert_eq!(HexChecksum::parse(hex.as_str()), Some(Crc64Iso::resume(crc).register()));

  println!();
  Ok(())
}

/// Streaming computation: process data in chunks.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let mut hasher = Crc64Iso::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let reg = hasher.register();
  println!("Register:         high=0x{:08X} low=0x{:08X}", reg.high, reg.low);
  assert_eq!(hasher.finalize(), Crc64Iso::checksum(b"123456789"));

  // finalize() is non-consuming: can continue after
  hasher.update(b"...");
  println!("Extended:         {}", hasher.hex());

  println!("Kernel (8 B):     {}", Crc64Iso::kernel_name_for_len(8));
  println!("Kernel (4 KiB):   {}", Crc64Iso::kernel_name_for_len(4096));

  println!();
}

/// Resume computation from a saved checksum state.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let mut hasher = Crc64Iso::new();
  hasher.update(part1);
  let saved_state = hasher.finalize();
  println!("Saved state after part1: 0x{saved_state:016X}");

  let mut resumed = Crc64Iso::resume(saved_state);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:  0x{final_crc:016X}");

  let mut full = Crc64Iso::new();
  full.update(part1);
  full.update(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation");

  println!();
}

/// Checksum two halves independently and merge.
fn combine_example() {
  println!("--- Combine ---\n");

  let data = b"hello world";
  let (a, b) = data.split_at(6);
  let combined = Crc64Iso::combine(Crc64Iso::checksum(a), Crc64Iso::checksum(b), b.len());
  println!("crc(\"hello \" || \"world\") = 0x{combined:016X}");
  assert_eq!(combined, Crc64Iso::checksum(data));

  println!();
}
