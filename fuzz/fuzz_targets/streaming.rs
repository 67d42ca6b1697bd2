//! Fuzz target for the streaming API.
//!
//! Arbitrary sequences of update calls, and a reader handing out arbitrary
//! short reads, must agree with the one-shot checksum.

#![no_main]

use std::io::Read;

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc64Iso, compute_reader};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

struct ShortReads<'a> {
  data: &'a [u8],
  sizes: &'a [usize],
  idx: usize,
}

impl Read for ShortReads<'_> {
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let want = match self.sizes.get(self.idx % self.sizes.len().max(1)) {
      Some(&s) => (s % 256).max(1),
      None => 1,
    };
    self.idx += 1;
    let n = want.min(buf.len()).min(self.data.len());
    let (head, tail) = self.data.split_at(n);
    buf[..n].copy_from_slice(head);
    self.data = tail;
    Ok(n)
  }
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Crc64Iso::checksum(data);

  let mut hasher = Crc64Iso::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "crc64-iso streaming mismatch");

  let reader = ShortReads {
    data,
    sizes: &input.chunk_sizes,
    idx: 0,
  };
  let hex = compute_reader(reader).expect("in-memory reader cannot fail");
  assert_eq!(hex, Crc64Iso::resume(expected).hex(), "crc64-iso reader mismatch");
});
