//! Kernel names, function pointers and selection for CRC-64/ISO.
//!
//! Every kernel has the signature [`Crc64Fn`]: it takes the register as one
//! `u64` (`high << 32 | low`) and returns the register after folding `data`.

use super::config::{Crc64IsoConfig, Crc64IsoForce};
use crate::common::{
  portable,
  reference::crc64_bitwise,
  tables::{CRC64_ISO_POLY, SLICE8_TABLES, SPLIT_TABLES},
};

/// Kernel function type.
pub type Crc64Fn = fn(u64, &[u8]) -> u64;

pub const SPLIT_WORD: &str = "portable/split-word";
pub const SLICE8: &str = "portable/slice8";
pub const REFERENCE: &str = "reference/bitwise";

/// Two-word kernel: the register never exists as a 64-bit value inside the loop.
pub fn split_word(crc: u64, data: &[u8]) -> u64 {
  let (high, low) = portable::split_word((crc >> 32) as u32, crc as u32, data, &SPLIT_TABLES);
  (u64::from(high) << 32) | u64::from(low)
}

pub fn slice8(crc: u64, data: &[u8]) -> u64 {
  portable::slice8(crc, data, &SLICE8_TABLES)
}

pub fn reference(crc: u64, data: &[u8]) -> u64 {
  crc64_bitwise(CRC64_ISO_POLY, crc, data)
}

/// Every kernel, for cross-checking.
pub const ALL: [(&str, Crc64Fn); 3] = [(SPLIT_WORD, split_word), (SLICE8, slice8), (REFERENCE, reference)];

/// Choose the kernel for an update of `len` bytes.
#[inline]
#[must_use]
pub fn select(cfg: Crc64IsoConfig, len: usize) -> (&'static str, Crc64Fn) {
  match cfg.force {
    Crc64IsoForce::SplitWord => (SPLIT_WORD, split_word),
    Crc64IsoForce::Slice8 => (SLICE8, slice8),
    Crc64IsoForce::Reference => (REFERENCE, reference),
    Crc64IsoForce::Auto if len >= cfg.slice8_min_len => (SLICE8, slice8),
    Crc64IsoForce::Auto => (SPLIT_WORD, split_word),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn auto_switches_on_threshold() {
    let cfg = Crc64IsoConfig::default();
    assert_eq!(select(cfg, 0).0, SPLIT_WORD);
    assert_eq!(select(cfg, cfg.slice8_min_len - 1).0, SPLIT_WORD);
    assert_eq!(select(cfg, cfg.slice8_min_len).0, SLICE8);
    assert_eq!(select(cfg, 1 << 20).0, SLICE8);
  }

  #[test]
  fn force_ignores_length() {
    for (force, name) in [
      (Crc64IsoForce::SplitWord, SPLIT_WORD),
      (Crc64IsoForce::Slice8, SLICE8),
      (Crc64IsoForce::Reference, REFERENCE),
    ] {
      let cfg = Crc64IsoConfig {
        force,
        ..Crc64IsoConfig::default()
      };
      assert_eq!(select(cfg, 0).0, name);
      assert_eq!(select(cfg, 4096).0, name);
    }
  }

  #[test]
  fn all_kernels_agree() {
    let data: [u8; 257] = core::array::from_fn(|i| (i as u8) ^ 0x5A);
    for start in [0u64, !0, 0x46A5_A938_8A5B_EFFE] {
      let expected = reference(start, &data);
      for (name, kernel) in ALL {
        assert_eq!(kernel(start, &data), expected, "{name} start={start:#018X}");
      }
    }
  }
}
