//! CRC-64/ISO-3309.
//!
//! This module provides [`Crc64Iso`], the streaming hasher for the ISO-3309
//! CRC-64 (polynomial x⁶⁴ + x⁴ + x³ + x + 1, reflected, init 0, no final XOR).
//!
//! # Kernels
//!
//! | Name | Description |
//! |------|-------------|
//! | `portable/split-word` | two 32-bit words, one byte per step |
//! | `portable/slice8` | native `u64` register, eight bytes per step |
//! | `reference/bitwise` | bit-at-a-time oracle |
//!
//! All kernels are bit-exact. `auto` picks split-word for short updates and
//! slice-by-8 from [`Crc64IsoConfig::slice8_min_len`] bytes on.

pub(crate) mod config;
pub(crate) mod kernels;

pub use config::{Crc64IsoConfig, Crc64IsoForce};
use traits::{Checksum, ChecksumCombine};

use crate::{
  common::{
    combine::{Gf2Matrix64, combine_crc64, generate_shift8_matrix_64},
    tables::CRC64_ISO_POLY,
  },
  hex::HexChecksum,
  register::Register,
};

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Selection
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn crc64_iso_update(crc: u64, data: &[u8]) -> u64 {
  let (_, kernel) = kernels::select(config::get(), data.len());
  kernel(crc, data)
}

#[inline]
#[must_use]
pub(crate) fn crc64_selected_kernel_name(len: usize) -> &'static str {
  kernels::select(config::get(), len).0
}

// ─────────────────────────────────────────────────────────────────────────────
// Public Type
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-64/ISO-3309 checksum.
///
/// # Properties
///
/// - **Polynomial**: 0x000000000000001B (normal), 0xD800000000000000 (reflected)
/// - **Initial value**: 0x0000000000000000
/// - **Final XOR**: 0x0000000000000000
/// - **Reflect input/output**: Yes
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc64Iso};
///
/// let crc = Crc64Iso::checksum(b"123456789");
/// assert_eq!(crc, 0x46A5A9388A5BEFFE);
/// assert_eq!(Crc64Iso::hex_of(b"123456789"), "46A5A9388A5BEFFE");
///
/// let mut hasher = Crc64Iso::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc64Iso {
  state: u64,
}

impl Crc64Iso {
  /// Pre-computed shift-by-8 matrix for combine.
  const SHIFT8_MATRIX: Gf2Matrix64 = generate_shift8_matrix_64(CRC64_ISO_POLY);

  /// Create a hasher to resume from a previous CRC value.
  ///
  /// With no final XOR the CRC value is the register itself.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u64) -> Self {
    Self { state: crc }
  }

  /// Create a hasher whose register is `reg`.
  #[inline]
  #[must_use]
  pub const fn from_register(reg: Register) -> Self {
    Self { state: reg.to_u64() }
  }

  /// Current register, split into its two words.
  #[inline]
  #[must_use]
  pub const fn register(&self) -> Register {
    Register::from_u64(self.state)
  }

  /// Current checksum as 16 uppercase hex digits.
  #[inline]
  #[must_use]
  pub const fn hex(&self) -> HexChecksum {
    crate::hex::format(self.register())
  }

  /// One-shot checksum of `data`, formatted.
  #[inline]
  #[must_use]
  pub fn hex_of(data: &[u8]) -> HexChecksum {
    let mut hasher = <Self as Checksum>::new();
    hasher.update(data);
    hasher.hex()
  }

  /// Get the name of the kernel `auto` resolves to for large inputs, or the
  /// forced kernel.
  #[must_use]
  pub fn backend_name() -> &'static str {
    crc64_selected_kernel_name(usize::MAX)
  }

  /// Get the effective CRC-64/ISO configuration (overrides + threshold).
  #[must_use]
  pub fn config() -> Crc64IsoConfig {
    config::get()
  }

  /// Returns the kernel name that the selector would choose for `len`.
  ///
  /// This is intended for debugging/benchmarking and does not allocate.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    crc64_selected_kernel_name(len)
  }
}

impl Checksum for Crc64Iso {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn new() -> Self {
    Self { state: 0 }
  }

  #[inline]
  fn with_initial(initial: u64) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = crc64_iso_update(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.state
  }

  #[inline]
  fn reset(&mut self) {
    self.state = 0;
  }
}

impl ChecksumCombine for Crc64Iso {
  fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    combine_crc64(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}
