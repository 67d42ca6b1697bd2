//! Streaming checksum traits.
//!
//! - **Streaming**: incremental updates, so inputs never need to fit in memory
//! - **One-shot**: a provided `checksum()` for data already in memory
//! - **Combine**: optional O(log n) concatenation for independently computed parts

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc64Iso};
///
/// // One-shot
/// let crc = Crc64Iso::checksum(b"123456789");
///
/// // Streaming
/// let mut hasher = Crc64Iso::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - feeding a sequence in any number of consecutive chunks must produce the
///   same output as feeding it in one `update()`
pub trait Checksum: Clone + Default {
  /// Output size in bytes (8 for CRC-64).
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial value.
  ///
  /// Useful for resuming a checksum computation or for non-standard initial values.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Fold additional data into the running state.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything fed so far.
  ///
  /// This does not consume the hasher; further updates continue from the
  /// same state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::Crc64Iso;
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Crc64Iso::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:016X}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Drain `inner` to end of stream and return the checksum of every byte read.
  ///
  /// Memory use is bounded by one fixed-size copy buffer regardless of the
  /// stream length. Either the whole stream is folded or an error is returned;
  /// there is no partial result.
  #[cfg(feature = "std")]
  #[inline]
  fn checksum_reader<R>(inner: R) -> std::io::Result<Self::Output>
  where
    R: std::io::Read,
    Self: Sized,
  {
    let mut reader = Self::reader(inner);
    std::io::copy(&mut reader, &mut std::io::sink())?;
    Ok(reader.crc())
  }

  /// Wrap a writer to compute the checksum of everything written through it.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::Crc64Iso;
  /// use std::{fs::File, io::Write};
  ///
  /// let mut writer = Crc64Iso::writer(File::create("output.bin")?);
  /// writer.write_all(b"hello world")?;
  /// let (_file, crc) = writer.into_parts();
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums that support combination of independently computed parts.
///
/// For a CRC with zero initial value and no final XOR the map is linear:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// The exponentiation uses square-and-multiply for O(log n) complexity, which
/// lets callers split a large input, checksum the parts on different threads,
/// and fold the results back together.
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, compute `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
