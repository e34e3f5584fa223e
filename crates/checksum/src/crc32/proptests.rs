extern crate std;

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use super::*;

proptest! {
  #[test]
  fn crc32_matches_bitwise(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc32::checksum(&data);
    let reference = portable::crc32_bitwise_ieee(!0, &data) ^ !0;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn kernels_agree(data in proptest::collection::vec(any::<u8>(), 0..=2048), state in any::<u32>()) {
    let bitwise = portable::crc32_bitwise_ieee(state, &data);
    prop_assert_eq!(portable::crc32_bytewise_ieee(state, &data), bitwise);
    prop_assert_eq!(portable::crc32_slice8_ieee(state, &data), bitwise);
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc32::checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc32_chunked_update_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut state = INIT;
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32IsoHdlc);

    for part in data.chunks(chunk) {
      state = update(state, part);
      reference.update(part);
    }

    prop_assert_eq!(state ^ XOR_OUT, reference.finalize() as u32);
  }

  #[test]
  fn crc32_combine_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let crc_a = Crc32::checksum(a);
    let crc_b = Crc32::checksum(b);
    let combined = Crc32::combine(crc_a, crc_b, b.len());

    let ref_crc_a = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, a);
    let ref_crc_b = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, b);
    let ref_combined = crc_fast::checksum_combine(CrcAlgorithm::Crc32IsoHdlc, ref_crc_a, ref_crc_b, b.len() as u64) as u32;

    prop_assert_eq!(combined, ref_combined);
  }

  #[test]
  fn shift_zeros_matches_zero_buffer(state in any::<u32>(), len in 0usize..=1024) {
    let zeros: Vec<u8> = std::vec![0u8; len];
    prop_assert_eq!(shift_zeros(state, len), update(state, &zeros));
  }

  #[test]
  fn register_is_complement_of_checksum(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    prop_assert_eq!(Crc32::register(&data), !Crc32::checksum(&data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Compensation
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn compensation_hits_target(
    data in proptest::collection::vec(any::<u8>(), 4..=1024),
    offset in any::<usize>(),
    target in any::<u32>(),
  ) {
    let offset = offset % (data.len() - 3);
    let mut buf = data.clone();
    Crc32::compensate(&mut buf, offset, target).unwrap();

    prop_assert_eq!(buf.len(), data.len());
    prop_assert_eq!(Crc32::checksum(&buf), target);
    prop_assert_eq!(crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &buf) as u32, target);
    prop_assert_eq!(&buf[..offset], &data[..offset]);
    prop_assert_eq!(&buf[offset + 4..], &data[offset + 4..]);
  }

  #[test]
  fn compensate_tail_hits_target(data in proptest::collection::vec(any::<u8>(), 4..=512), target in any::<u32>()) {
    let mut buf = data;
    Crc32::compensate_tail(&mut buf, target).unwrap();
    prop_assert_eq!(Crc32::checksum(&buf), target);
  }
}
