use core::fmt;
use std::{io, path::PathBuf};

use checksum::ChecksumError;

/// A single element could not be generated or verified.
#[derive(Debug)]
#[non_exhaustive]
pub enum GenerationError {
  /// The source could not be checksummed.
  Checksum(ChecksumError),
  /// The `.crc` file could not be written.
  Write { path: PathBuf, source: io::Error },
  /// An existing `.crc` file could not be read.
  Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenerationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Checksum(err) => err.fmt(f),
      Self::Write { path, source } => write!(f, "could not write file {}: {source}", path.display()),
      Self::Read { path, source } => write!(f, "could not read file {}: {source}", path.display()),
    }
  }
}

impl core::error::Error for GenerationError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Checksum(err) => Some(err),
      Self::Write { source, .. } | Self::Read { source, .. } => Some(source),
    }
  }
}

impl From<ChecksumError> for GenerationError {
  fn from(err: ChecksumError) -> Self {
    Self::Checksum(err)
  }
}
