//! Portable table-driven CRC-64/ISO kernels.
//!
//! | Kernel | Register | Bytes/iter | Tables |
//! |--------|----------|------------|--------|
//! | [`split_word`] | `(u32, u32)` | 1 | 2×256×u32 |
//! | [`slice8`] | `u64` | 8 | 8×256×u64 |
//!
//! The split-word kernel never forms a 64-bit value: every shift carries the
//! byte leaving `high` into the top of `low` by hand. Slice-by-8 XORs eight
//! input bytes into the register and combines eight table lookups, falling back
//! to byte-at-a-time for the tail.

// SAFETY: All array indexing in this module uses bounded indices:
// - `as_chunks` guarantees chunk sizes
// - Table indices use `& 0xFF` (0..255) or explicit byte extraction
#![allow(clippy::indexing_slicing)]

use super::tables::{SplitTables, TABLE_LEN};

/// Fold one byte into a two-word register.
///
/// ```text
/// shr   = (high & 0xFF) << 24
/// high' = (high >> 8)         ^ table.high[(low ^ byte) & 0xFF]
/// low'  = ((low >> 8) | shr)  ^ table.low [(low ^ byte) & 0xFF]
/// ```
#[inline(always)]
#[must_use]
pub const fn split_word_step(high: u32, low: u32, byte: u8, tables: &SplitTables) -> (u32, u32) {
  let shr = (high & 0xFF) << 24;
  let tmp_high = high >> 8;
  let tmp_low = (low >> 8) | shr;
  let index = ((low ^ byte as u32) & 0xFF) as usize;
  (tmp_high ^ tables.high[index], tmp_low ^ tables.low[index])
}

/// Fold `data` into a two-word register, one byte at a time.
#[inline]
#[must_use]
pub fn split_word(high: u32, low: u32, data: &[u8], tables: &SplitTables) -> (u32, u32) {
  data
    .iter()
    .fold((high, low), |(high, low), &byte| split_word_step(high, low, byte, tables))
}

/// Fold `data` into a 64-bit register using slice-by-8.
#[inline]
#[must_use]
pub fn slice8(mut crc: u64, data: &[u8], tables: &[[u64; TABLE_LEN]; 8]) -> u64 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let val = u64::from_le_bytes(*chunk) ^ crc;

    crc = tables[7][(val & 0xFF) as usize]
      ^ tables[6][((val >> 8) & 0xFF) as usize]
      ^ tables[5][((val >> 16) & 0xFF) as usize]
      ^ tables[4][((val >> 24) & 0xFF) as usize]
      ^ tables[3][((val >> 32) & 0xFF) as usize]
      ^ tables[2][((val >> 40) & 0xFF) as usize]
      ^ tables[1][((val >> 48) & 0xFF) as usize]
      ^ tables[0][(val >> 56) as usize];
  }

  for &byte in remainder {
    let index = ((crc ^ (byte as u64)) & 0xFF) as usize;
    crc = tables[0][index] ^ (crc >> 8);
  }

  crc
}
