//! Fixed-width hexadecimal rendering of a CRC register.

use core::{fmt, str};

use crate::register::Register;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A checksum rendered as exactly 16 uppercase hex digits (`high` then `low`).
///
/// Stored inline, never allocates. This is the text written to `.crc` files.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexChecksum([u8; HexChecksum::LEN]);

impl HexChecksum {
  /// Number of characters in the rendering.
  pub const LEN: usize = 16;

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
    &self.0
  }

  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    // Only ever filled from `DIGITS`.
    match str::from_utf8(&self.0) {
      Ok(s) => s,
      Err(_) => "",
    }
  }

  /// Parse a 16-digit hex checksum (either case) back into its register.
  ///
  /// Surrounding ASCII whitespace is ignored, so a `.crc` file ending in a
  /// newline still parses. Anything else that is not exactly 16 hex digits
  /// yields `None`.
  #[must_use]
  pub fn parse(text: &str) -> Option<Register> {
    let text = text.trim_ascii();
    if text.len() != Self::LEN {
      return None;
    }
    let mut value = 0u64;
    for &b in text.as_bytes() {
      let nibble = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => return None,
      };
      value = (value << 4) | u64::from(nibble);
    }
    Some(Register::from_u64(value))
  }
}

/// Render `reg` as 16 uppercase hex digits, each word zero-padded to 8.
#[must_use]
#[allow(clippy::indexing_slicing)] // `i < LEN` and nibbles index a 16-entry table
pub const fn format(reg: Register) -> HexChecksum {
  let value = reg.to_u64();
  let mut out = [0u8; HexChecksum::LEN];
  let mut i = 0;
  while i < HexChecksum::LEN {
    let shift = (HexChecksum::LEN - 1 - i) * 4;
    out[i] = DIGITS[((value >> shift) & 0xF) as usize];
    i += 1;
  }
  HexChecksum(out)
}

impl fmt::Display for HexChecksum {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for HexChecksum {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("HexChecksum").field(&self.as_str()).finish()
  }
}

impl AsRef<str> for HexChecksum {
  #[inline]
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl AsRef<[u8]> for HexChecksum {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl PartialEq<str> for HexChecksum {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for HexChecksum {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl From<Register> for HexChecksum {
  #[inline]
  fn from(reg: Register) -> Self {
    format(reg)
  }
}
