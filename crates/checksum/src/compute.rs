//! Checksum a whole source and render it as [`HexChecksum`].
//!
//! Every source goes through the same byte fold as [`Crc64Iso::update`]:
//! buffers and strings directly, readers and files through
//! [`Checksum::checksum_reader`], which streams with a constant-size buffer
//! and retries `Interrupted` reads.
//!
//! ```rust
//! use checksum::{ByteSource, compute, compute_str};
//!
//! assert_eq!(compute_str(Some("123456789"))?, "46A5A9388A5BEFFE");
//! assert_eq!(compute(Some(ByteSource::Bytes(b"")))?, "0000000000000000");
//! assert!(compute(None).is_err());
//! # Ok::<(), checksum::ChecksumError>(())
//! ```

use std::{
  fs::File,
  io::{self, Read},
  path::{self, Path},
  string::ToString,
};

use traits::Checksum;

use crate::{crc64::Crc64Iso, error::ChecksumError, hex::HexChecksum};

/// A source of bytes to checksum.
pub enum ByteSource<'a> {
  /// An in-memory buffer.
  Bytes(&'a [u8]),
  /// A string, checksummed over its UTF-8 bytes.
  Str(&'a str),
  /// A file, read to the end.
  File(&'a Path),
  /// Any reader, consumed to exhaustion.
  Reader(&'a mut dyn Read),
}

impl core::fmt::Debug for ByteSource<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
      Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
      Self::File(p) => f.debug_tuple("File").field(p).finish(),
      Self::Reader(_) => f.write_str("Reader(..)"),
    }
  }
}

/// Checksum `source`, or fail with [`ChecksumErrorKind::InvalidInput`] if it is absent.
///
/// [`ChecksumErrorKind::InvalidInput`]: crate::ChecksumErrorKind::InvalidInput
pub fn compute(source: Option<ByteSource<'_>>) -> Result<HexChecksum, ChecksumError> {
  match source.ok_or(ChecksumError::invalid_input("no input source was provided"))? {
    ByteSource::Bytes(data) => Ok(Crc64Iso::hex_of(data)),
    ByteSource::Str(text) => Ok(Crc64Iso::hex_of(text.as_bytes())),
    ByteSource::File(path) => compute_file(path),
    ByteSource::Reader(reader) => compute_reader(reader),
  }
}

/// Checksum the UTF-8 bytes of `input`.
pub fn compute_str(input: Option<&str>) -> Result<HexChecksum, ChecksumError> {
  compute(input.map(ByteSource::Str))
}

/// Checksum everything `reader` yields until end of stream.
pub fn compute_reader<R: Read>(reader: R) -> Result<HexChecksum, ChecksumError> {
  Crc64Iso::checksum_reader(reader)
    .map(|crc| Crc64Iso::resume(crc).hex())
    .map_err(|e| ChecksumError::io("could not read input stream", e))
}

/// Checksum the full contents of the file at `path`.
///
/// Error contexts carry the absolute path: `could not find file <path>` when
/// it does not exist, `could not open file <path>` when it cannot be opened
/// otherwise, `could not read file <path>` when reading fails part way.
pub fn compute_file<P: AsRef<Path>>(path: P) -> Result<HexChecksum, ChecksumError> {
  let path = path.as_ref();
  if path.as_os_str().is_empty() {
    return Err(ChecksumError::invalid_input("file path is empty"));
  }
  let shown = path::absolute(path)
    .map(|p| p.display().to_string())
    .unwrap_or_else(|_| path.display().to_string());

  let file = File::open(path).map_err(|e| {
    let op = if e.kind() == io::ErrorKind::NotFound {
      "could not find file"
    } else {
      "could not open file"
    };
    ChecksumError::io(std::format!("{op} {shown}"), e)
  })?;

  let crc =
    Crc64Iso::checksum_reader(file).map_err(|e| ChecksumError::io(std::format!("could not read file {shown}"), e))?;
  Ok(Crc64Iso::resume(crc).hex())
}
