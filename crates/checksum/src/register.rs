//! The CRC-64/ISO register as a pair of 32-bit words.

use core::fmt;

use crate::{common::tables::SplitTables, hex::HexChecksum};

/// Running CRC-64/ISO accumulator, split into its high and low 32-bit words.
///
/// Converts losslessly to and from `u64` as `high << 32 | low`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Register {
  pub high: u32,
  pub low: u32,
}

impl Register {
  /// The initial register of every computation.
  pub const ZERO: Self = Self { high: 0, low: 0 };

  #[inline]
  #[must_use]
  pub const fn new(high: u32, low: u32) -> Self {
    Self { high, low }
  }

  #[inline]
  #[must_use]
  pub const fn from_u64(value: u64) -> Self {
    Self {
      high: (value >> 32) as u32,
      low: value as u32,
    }
  }

  #[inline]
  #[must_use]
  pub const fn to_u64(self) -> u64 {
    ((self.high as u64) << 32) | self.low as u64
  }

  /// Fold one byte into the register.
  ///
  /// ```rust
  /// use checksum::{Register, SPLIT_TABLES};
  ///
  /// let reg = Register::ZERO.update(b'a', &SPLIT_TABLES);
  /// assert_eq!(reg, Register::new(0x5BB0_0000, 0));
  /// ```
  #[inline]
  #[must_use]
  pub const fn update(self, byte: u8, tables: &SplitTables) -> Self {
    let (high, low) = crate::common::portable::split_word_step(self.high, self.low, byte, tables);
    Self { high, low }
  }

  /// Fold every byte of `data`, in order.
  #[inline]
  #[must_use]
  pub fn fold(self, data: &[u8], tables: &SplitTables) -> Self {
    let (high, low) = crate::common::portable::split_word(self.high, self.low, data, tables);
    Self { high, low }
  }

  /// Format as 16 uppercase hex digits, `high` first.
  #[inline]
  #[must_use]
  pub const fn to_hex(self) -> HexChecksum {
    crate::hex::format(self)
  }
}

impl From<u64> for Register {
  #[inline]
  fn from(value: u64) -> Self {
    Self::from_u64(value)
  }
}

impl From<Register> for u64 {
  #[inline]
  fn from(reg: Register) -> Self {
    reg.to_u64()
  }
}

impl fmt::Display for Register {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:08X}{:08X}", self.high, self.low)
  }
}
