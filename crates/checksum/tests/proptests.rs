//! Property-based tests for CRC-32 and compensation.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use checksum::{Checksum, ChecksumCombine, Crc32, compensate, compensate_register, patch_for};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// A buffer with room for a patch field and a valid offset into it.
fn arb_placement() -> impl Strategy<Value = (Vec<u8>, usize)> {
  prop::collection::vec(any::<u8>(), 4..2048).prop_flat_map(|data| {
    let max = data.len() - 4;
    (Just(data), 0..=max)
  })
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

proptest! {
  #[test]
  fn combine_chain(data in arb_data().prop_flat_map(|d| { let len = d.len(); (Just(d), arb_splits(len, 4)) })) {
    let (data, splits) = data;
    let mut acc = Crc32::checksum(&[]);
    let mut prev = 0;
    for split in splits {
      let part = &data[prev..split];
      acc = Crc32::combine(acc, Crc32::checksum(part), part.len());
      prev = split;
    }
    prop_assert_eq!(acc, Crc32::checksum(&data));
  }

  #[test]
  fn compensate_round_trip((data, offset) in arb_placement(), target in any::<u32>()) {
    let mut buf = data.clone();
    compensate(&mut buf, offset, target).unwrap();

    prop_assert_eq!(buf.len(), data.len());
    prop_assert_eq!(Crc32::checksum(&buf), target);
    prop_assert_eq!(&buf[..offset], &data[..offset]);
    prop_assert_eq!(&buf[offset + 4..], &data[offset + 4..]);
  }

  #[test]
  fn compensate_register_round_trip((data, offset) in arb_placement(), target in any::<u32>()) {
    let mut buf = data;
    compensate_register(&mut buf, offset, target).unwrap();
    prop_assert_eq!(Crc32::register(&buf), target);
  }

  #[test]
  fn patch_is_deterministic((data, offset) in arb_placement(), target in any::<u32>()) {
    let a = patch_for(&data, offset, target).unwrap();
    let b = patch_for(&data, offset, target).unwrap();
    prop_assert_eq!(a, b);
  }

  #[test]
  fn recompensating_is_stable((data, offset) in arb_placement(), target in any::<u32>()) {
    let mut once = data;
    compensate(&mut once, offset, target).unwrap();
    let mut twice = once.clone();
    compensate(&mut twice, offset, target).unwrap();
    prop_assert_eq!(once, twice);
  }

  #[test]
  fn invalid_offsets_never_mutate(data in prop::collection::vec(any::<u8>(), 0..64), extra in 0usize..64) {
    let mut buf = data.clone();
    let offset = data.len().saturating_sub(3) + extra;
    prop_assert!(compensate(&mut buf, offset, 0).is_err());
    prop_assert_eq!(buf, data);
  }
}
