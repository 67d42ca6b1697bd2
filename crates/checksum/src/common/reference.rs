//! Bitwise reference implementation.
//!
//! One bit at a time, no lookup tables. The table-driven kernels are checked
//! against it, and being a `const fn` it lets check values be asserted at
//! compile time. Roughly 8 operations per bit: verification and the forced
//! `reference` kernel only.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-64 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (`0xD800_0000_0000_0000` for ISO 3309)
/// * `init` - Initial register value
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state. The ISO 3309 model used here has no final XOR.
#[must_use]
pub const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::tables::CRC64_ISO_POLY;

  // Evaluated by the compiler: a wrong polynomial fails the build of the tests.
  const CHECK: u64 = crc64_bitwise(CRC64_ISO_POLY, 0, b"123456789");

  #[test]
  fn check_value() {
    assert_eq!(CHECK, 0x46A5_A938_8A5B_EFFE);
  }

  #[test]
  fn empty_keeps_init() {
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, 0, &[]), 0);
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, !0, &[]), !0);
  }

  #[test]
  fn go_iso_check_value() {
    // Same polynomial with init and final XOR of all ones.
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, !0, b"123456789") ^ !0, 0xB909_56C7_75A4_1001);
  }

  #[test]
  fn zero_bytes_from_zero_register_stay_zero() {
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, 0, &[0u8; 64]), 0);
  }
}
