//! GF(2) matrix operations for CRC-64 combination.
//!
//! With `crc(A)` and `crc(B)` known, `crc(A || B)` follows without touching the
//! bytes of `A` again:
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! Multiplication by `x^(8*len(B))` is a 64×64 matrix over GF(2), raised to the
//! byte length by square-and-multiply in O(log n) matrix products. The ISO 3309
//! model has a zero initial register and no final XOR, so no affine correction
//! term is needed.

// SAFETY: All array indexing in this module uses bounded loop indices (0..64).
// Clippy cannot prove this in const fn contexts, but the bounds are statically
// guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

/// A 64x64 GF(2) matrix represented as 64 columns.
///
/// Column `i` is the image of the unit vector with only bit `i` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix64([u64; 64]);

impl Gf2Matrix64 {
  /// Create the identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u64; 64];
    let mut i = 0;
    while i < 64 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Multiply the matrix by a vector.
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u64) -> u64 {
    let mut result = 0u64;
    let mut i = 0;
    while i < 64 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Matrix product `self * other`.
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u64; 64];
    let mut i = 0;
    while i < 64 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  /// Square the matrix.
  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// The "append one zero bit" operator for a reflected polynomial.
///
/// Bit 0 of the register leaves and pulls in the polynomial; every other bit
/// `j` moves down to `j - 1`.
#[must_use]
pub const fn generate_shift1_matrix_64(poly: u64) -> Gf2Matrix64 {
  let mut m = [0u64; 64];
  m[0] = poly;
  let mut j = 1;
  while j < 64 {
    m[j] = 1 << (j - 1);
    j += 1;
  }
  Gf2Matrix64(m)
}

/// The "append one zero byte" operator (x^8).
#[must_use]
pub const fn generate_shift8_matrix_64(poly: u64) -> Gf2Matrix64 {
  let shift1 = generate_shift1_matrix_64(poly);
  let shift2 = shift1.square();
  let shift4 = shift2.square();

  shift4.square()
}

/// Shift `crc` as if `len` zero bytes were appended.
#[must_use]
pub const fn shift_zero_bytes(crc: u64, len: usize, shift8_matrix: Gf2Matrix64) -> u64 {
  let mut mat = shift8_matrix;
  let mut result_mat = Gf2Matrix64::identity();
  let mut remaining = len;

  while remaining > 0 {
    if remaining & 1 != 0 {
      result_mat = result_mat.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  result_mat.mul_vec(crc)
}

/// Combine two CRC-64 values of a linear (zero init, no xorout) model.
#[must_use]
pub const fn combine_crc64(crc_a: u64, crc_b: u64, len_b: usize, shift8_matrix: Gf2Matrix64) -> u64 {
  shift_zero_bytes(crc_a, len_b, shift8_matrix) ^ crc_b
}
