//! Errors returned by the `compute` entry points.

use core::fmt;
use std::{io, string::String};

/// Broad category of a [`ChecksumError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumErrorKind {
  /// The source was absent or unusable before any byte was read.
  InvalidInput,
  /// The source could not be opened or read to the end.
  IoFailure,
}

/// Checksum computation failed.
///
/// A failed computation never yields a partial checksum.
#[derive(Debug)]
#[non_exhaustive]
pub enum ChecksumError {
  /// No source was provided.
  InvalidInput {
    /// What was missing.
    reason: &'static str,
  },
  /// The source could not be opened or read.
  Io {
    /// The operation and the absolute path involved.
    context: String,
    /// The underlying I/O failure.
    source: io::Error,
  },
}

impl ChecksumError {
  #[inline]
  #[must_use]
  pub(crate) const fn invalid_input(reason: &'static str) -> Self {
    Self::InvalidInput { reason }
  }

  #[inline]
  #[must_use]
  pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
    Self::Io {
      context: context.into(),
      source,
    }
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ChecksumErrorKind {
    match self {
      Self::InvalidInput { .. } => ChecksumErrorKind::InvalidInput,
      Self::Io { .. } => ChecksumErrorKind::IoFailure,
    }
  }
}

impl fmt::Display for ChecksumError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
      Self::Io { context, source } => write!(f, "{context}: {source}"),
    }
  }
}

impl core::error::Error for ChecksumError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::InvalidInput { .. } => None,
      Self::Io { source, .. } => Some(source),
    }
  }
}

#[cfg(test)]
mod tests {
  use core::error::Error;
  use std::string::ToString;

  use super::*;

  #[test]
  fn display_invalid_input() {
    let err = ChecksumError::invalid_input("no input source was provided");
    assert_eq!(err.to_string(), "invalid input: no input source was provided");
    assert_eq!(err.kind(), ChecksumErrorKind::InvalidInput);
    assert!(err.source().is_none());
  }

  #[test]
  fn display_io_includes_cause() {
    let err = ChecksumError::io("could not read file /tmp/x", io::Error::other("disk on fire"));
    assert_eq!(err.to_string(), "could not read file /tmp/x: disk on fire");
    assert_eq!(err.kind(), ChecksumErrorKind::IoFailure);
  }

  #[test]
  fn source_is_the_io_error() {
    let err = ChecksumError::io("could not read input stream", io::Error::from(io::ErrorKind::UnexpectedEof));
    let source = err.source().and_then(|e| e.downcast_ref::<io::Error>());
    assert_eq!(source.map(io::Error::kind), Some(io::ErrorKind::UnexpectedEof));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error + 'static>() {}

    assert_send::<ChecksumError>();
    assert_sync::<ChecksumError>();
    assert_error::<ChecksumError>();
  }
}
