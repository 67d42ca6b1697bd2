//! Checking existing `.crc` files against their sources.

use std::{fs, path::Path, str};

use checksum::{HexChecksum, Register, compute_file};

use crate::error::GenerationError;

/// Result of comparing a `.crc` file with a fresh checksum of its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
  /// The recorded checksum is current.
  Match(HexChecksum),
  /// The source changed since the `.crc` file was written.
  Mismatch { expected: Register, actual: HexChecksum },
  /// The `.crc` file does not hold a 16-digit hex checksum.
  Malformed,
}

impl Verification {
  #[inline]
  #[must_use]
  pub fn is_match(&self) -> bool {
    matches!(self, Self::Match(_))
  }
}

/// Compare the checksum recorded in `crc_file` with that of `source`.
pub fn verify(source: &Path, crc_file: &Path) -> Result<Verification, GenerationError> {
  let recorded = fs::read(crc_file).map_err(|source| GenerationError::Read {
    path: crc_file.to_path_buf(),
    source,
  })?;
  let Some(expected) = str::from_utf8(&recorded).ok().and_then(HexChecksum::parse) else {
    return Ok(Verification::Malformed);
  };

  let actual = compute_file(source)?;
  if actual == expected.to_hex() {
    Ok(Verification::Match(actual))
  } else {
    Ok(Verification::Mismatch { expected, actual })
  }
}
