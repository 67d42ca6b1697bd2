//! Const-fn CRC-64/ISO lookup table generation.
//!
//! Two table families are generated from the same polynomial
//! (x⁶⁴ + x⁴ + x³ + x + 1, reflected):
//!
//! | Family | Layout | Consumer |
//! |--------|--------|----------|
//! | Split-word | 2×256×u32 (`high`, `low`) | byte-at-a-time two-word kernel |
//! | Slice-by-8 | 8×256×u64 | native 64-bit kernel, 8 bytes per iteration |
//!
//! Both are computed at compile time and embedded as read-only statics.
//! Entry `i` of the split tables, joined as `high << 32 | low`, equals entry `i`
//! of the first slice-by-8 table.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..8).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Number of entries per table: one per possible input byte.
pub const TABLE_LEN: usize = 256;

/// Contribution of the reversed polynomial to the high word.
pub const POLY_REVERSED_HIGH: u32 = 0xD800_0000;

/// Top bit of a 32-bit word; receives the bit shifted out of `high`.
pub const BIT32_MSB: u32 = 1 << 31;

/// CRC-64/ISO polynomial (0x000000000000001B) in reflected form.
pub const CRC64_ISO_POLY: u64 = (POLY_REVERSED_HIGH as u64) << 32;

// ─────────────────────────────────────────────────────────────────────────────
// Split-word tables
// ─────────────────────────────────────────────────────────────────────────────

/// The pair of 256-entry tables driving the two-word kernel.
///
/// `(high[i], low[i])` is the register obtained by feeding byte `i` through
/// the shift algorithm starting from `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitTables {
  /// High 32 bits of each entry.
  pub high: [u32; TABLE_LEN],
  /// Low 32 bits of each entry.
  pub low: [u32; TABLE_LEN],
}

impl SplitTables {
  /// Build both tables, eight right shifts per byte value.
  ///
  /// The two words are shifted as one 64-bit value: the bit leaving the
  /// bottom of `high` enters the top of `low`.
  #[must_use]
  pub const fn generate() -> Self {
    let mut high_table = [0u32; TABLE_LEN];
    let mut low_table = [0u32; TABLE_LEN];

    let mut i = 0usize;
    while i < TABLE_LEN {
      let mut low = i as u32;
      let mut high = 0u32;

      let mut bit = 0;
      while bit < 8 {
        let carry = (low & 1) != 0;
        low >>= 1;
        if (high & 1) == 1 {
          low ^= BIT32_MSB;
        }
        high >>= 1;
        if carry {
          high ^= POLY_REVERSED_HIGH;
        }
        bit += 1;
      }

      high_table[i] = high;
      low_table[i] = low;
      i += 1;
    }

    Self {
      high: high_table,
      low: low_table,
    }
  }

  /// Entry `index` joined into one 64-bit value.
  #[inline]
  #[must_use]
  pub const fn entry(&self, index: u8) -> u64 {
    ((self.high[index as usize] as u64) << 32) | self.low[index as usize] as u64
  }
}

/// Process-wide split-word tables.
pub static SPLIT_TABLES: SplitTables = SplitTables::generate();

// ─────────────────────────────────────────────────────────────────────────────
// Native 64-bit tables
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-64 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc64_table_entry(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 8 CRC-64 lookup tables for slice-by-8 computation.
///
/// `tables[k][i]` is the contribution of byte `i` followed by `k` zero bytes.
#[must_use]
pub const fn generate_crc64_tables_8(poly: u64) -> [[u64; TABLE_LEN]; 8] {
  let mut tables = [[0u64; TABLE_LEN]; 8];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = crc64_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Process-wide slice-by-8 tables.
pub static SLICE8_TABLES: [[u64; TABLE_LEN]; 8] = generate_crc64_tables_8(CRC64_ISO_POLY);
