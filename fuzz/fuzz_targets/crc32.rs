//! Fuzz target for CRC-32 (ISO-HDLC).
//!
//! Tests that:
//! - No panics on arbitrary input
//! - The register form is the complement of the checksum
//! - Combine produces correct results
//! - Shifting over zero bytes matches feeding them

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, ChecksumCombine, Crc32, crc32::shift_zeros};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  zeros: u16,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Crc32::checksum(data);
  assert_eq!(Crc32::register(data), !oneshot, "register mismatch");

  let (a, b) = data.split_at(split);

  let combined = Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len());
  assert_eq!(oneshot, combined, "combine mismatch");

  let zeros = usize::from(input.zeros);
  let mut padded = data.clone();
  padded.resize(data.len() + zeros, 0);
  assert_eq!(
    shift_zeros(Crc32::register(data), zeros),
    Crc32::register(&padded),
    "shift_zeros mismatch"
  );
});
