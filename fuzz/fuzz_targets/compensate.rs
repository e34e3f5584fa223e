//! Fuzz target for CRC-32 compensation.
//!
//! Tests that:
//! - Valid placements always reach the target and only touch the field
//! - Invalid placements are rejected and leave the buffer untouched

#![no_main]

use arbitrary::Arbitrary;
use checksum::{CrcCompensationError, compensate, crc32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  offset: usize,
  target: u32,
}

fuzz_target!(|input: Input| {
  let mut buf = input.data.clone();
  let fits = input.offset.checked_add(4).is_some_and(|end| end <= buf.len());

  match compensate(&mut buf, input.offset, input.target) {
    Ok(()) => {
      assert!(fits, "accepted out-of-range offset");
      assert_eq!(crc32(&buf), input.target);
      assert_eq!(buf.len(), input.data.len());
      assert_eq!(&buf[..input.offset], &input.data[..input.offset]);
      assert_eq!(&buf[input.offset + 4..], &input.data[input.offset + 4..]);
    }
    Err(CrcCompensationError::InvalidOffset { offset, len }) => {
      assert!(!fits, "rejected valid offset");
      assert_eq!((offset, len), (input.offset, input.data.len()));
      assert_eq!(buf, input.data);
    }
    Err(err) => panic!("unexpected error: {err}"),
  }
});
