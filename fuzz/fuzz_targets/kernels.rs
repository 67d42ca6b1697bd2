//! Differential fuzz target: every kernel against the bitwise reference,
//! from an arbitrary starting register.

#![no_main]

use arbitrary::Arbitrary;
use checksum::__internal::{KERNELS, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  start: u64,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let expected = reference(input.start, &input.data);
  for (name, kernel) in KERNELS {
    assert_eq!(kernel(input.start, &input.data), expected, "{name} mismatch");
  }
});
