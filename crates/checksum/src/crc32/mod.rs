//! CRC-32 (IEEE 802.3 / ISO-HDLC).
//!
//! This module provides:
//! - [`Crc32`] - the one-shot checksum type and its register form
//! - [`zeros_operator`] / [`shift_zeros`] - the effect of trailing zero bytes
//!   on the register, as a GF(2) matrix

pub mod config;
mod portable;

#[cfg(test)]
mod proptests;

pub use config::{Crc32Config, Crc32Force, Crc32Tunables};
use traits::{Checksum, ChecksumCombine, ChecksumCompensate, CrcCompensationError};

use crate::{
  common::{
    combine::{Gf2Matrix32, combine_crc32, generate_shift8_matrix_32},
    tables::{CRC32_IEEE_POLY, generate_crc32_tables_8},
  },
  dispatch::{Crc32Dispatcher, Crc32Fn, Selected},
};

/// Initial register value.
pub const INIT: u32 = 0xFFFF_FFFF;

/// Value XORed into the register to produce the final checksum.
pub const XOR_OUT: u32 = 0xFFFF_FFFF;

/// Portable kernel tables (pre-computed at compile time).
mod kernel_tables {
  use super::*;
  pub static IEEE_TABLES_8: [[u32; 256]; 8] = generate_crc32_tables_8(CRC32_IEEE_POLY);
}

/// The 256-entry lookup table.
///
/// Built at compile time from the polynomial and shared read-only by every
/// caller.
#[inline]
#[must_use]
pub fn table() -> &'static [u32; 256] {
  &kernel_tables::IEEE_TABLES_8[0]
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatcher Selection
// ─────────────────────────────────────────────────────────────────────────────

fn select_kernel(config: &Crc32Config, len: usize) -> Selected<Crc32Fn> {
  match config.force {
    Crc32Force::Bitwise => Selected::new(portable::BITWISE_KERNEL_NAME, portable::crc32_bitwise_ieee),
    Crc32Force::Bytewise => Selected::new(portable::BYTEWISE_KERNEL_NAME, portable::crc32_bytewise_ieee),
    Crc32Force::Slice8 => Selected::new(portable::SLICE8_KERNEL_NAME, portable::crc32_slice8_ieee),
    Crc32Force::Auto => {
      if len < config.tunables.bytewise_to_slice8 {
        Selected::new(portable::BYTEWISE_KERNEL_NAME, portable::crc32_bytewise_ieee)
      } else {
        Selected::new(portable::SLICE8_KERNEL_NAME, portable::crc32_slice8_ieee)
      }
    }
  }
}

/// Static dispatcher for CRC-32.
pub(crate) static CRC32_DISPATCHER: Crc32Dispatcher = Crc32Dispatcher::new(config::resolve, select_kernel);

/// Name of the kernel that processes a buffer of `len` bytes.
///
/// Returns e.g. `"portable/bytewise"` or `"portable/slice8"`.
#[must_use]
pub fn kernel_name_for_len(len: usize) -> &'static str {
  CRC32_DISPATCHER.get(len).name
}

// ─────────────────────────────────────────────────────────────────────────────
// Register-level operations
// ─────────────────────────────────────────────────────────────────────────────

/// Feed `data` through the table-driven update starting from `state`.
///
/// No initial value and no final XOR are applied, so starting from `0` gives
/// the linear part of the CRC and starting from [`INIT`] gives the register
/// form.
#[inline]
#[must_use]
pub(crate) fn update(state: u32, data: &[u8]) -> u32 {
  CRC32_DISPATCHER.call(state, data)
}

/// The GF(2) matrix for feeding `len` zero bytes through the table.
///
/// This is the one-byte round `state -> table[state & 0xFF] ^ (state >> 8)`
/// composed `len` times, built by square-and-multiply in O(log len) matrix
/// products.
#[inline]
#[must_use]
pub const fn zeros_operator(len: usize) -> Gf2Matrix32 {
  Crc32::SHIFT8_MATRIX.pow(len)
}

/// Advance `state` over `len` zero bytes without touching memory.
///
/// Equal to feeding `len` zero bytes through the table from `state`.
#[inline]
#[must_use]
pub const fn shift_zeros(state: u32, len: usize) -> u32 {
  zeros_operator(len).mul_vec(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 IEEE
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 checksum (IEEE 802.3 / ISO-HDLC).
///
/// Used in Ethernet FCS, ZIP, gzip, PNG, and many other formats.
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: Yes
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"123456789");
/// assert_eq!(crc, 0xCBF4_3926); // "123456789" test vector
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32;

impl Crc32 {
  /// Pre-computed shift-by-8 matrix for combine.
  pub const SHIFT8_MATRIX: Gf2Matrix32 = generate_shift8_matrix_32(CRC32_IEEE_POLY);

  /// The CRC register after consuming `data`, before the final XOR.
  ///
  /// Always `!Crc32::checksum(data)`. Some consumers report this form instead
  /// of the finalized checksum.
  ///
  /// ```
  /// use checksum::{Checksum, Crc32};
  ///
  /// assert_eq!(Crc32::register(b"Hello, World!\n"), 0x4B17_617B);
  /// assert_eq!(Crc32::checksum(b"Hello, World!\n"), 0xB4E8_9E84);
  /// ```
  #[inline]
  #[must_use]
  pub fn register(data: &[u8]) -> u32 {
    update(INIT, data)
  }

  /// Get the name of the kernel selected for a buffer of `len` bytes.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    kernel_name_for_len(len)
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn checksum(data: &[u8]) -> u32 {
    update(INIT, data) ^ XOR_OUT
  }

  #[inline]
  fn checksum_vectored(bufs: &[&[u8]]) -> u32 {
    bufs.iter().fold(INIT, |state, buf| update(state, buf)) ^ XOR_OUT
  }
}

impl ChecksumCombine for Crc32 {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine_crc32(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}

impl ChecksumCompensate for Crc32 {
  const PATCH_SIZE: usize = crate::compensate::PATCH_SIZE;

  #[inline]
  fn compensate(buf: &mut [u8], offset: usize, target: u32) -> Result<(), CrcCompensationError> {
    crate::compensate::compensate(buf, offset, target)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const TEST_DATA: &[u8] = b"123456789";
  const HELLO: &[u8] = b"Hello, World!\n";

  #[test]
  fn test_crc32_ieee_checksum() {
    assert_eq!(Crc32::checksum(TEST_DATA), 0xCBF4_3926);
  }

  #[test]
  fn test_crc32_empty() {
    assert_eq!(Crc32::checksum(&[]), 0);
    assert_eq!(Crc32::register(&[]), INIT);
  }

  #[test]
  fn test_crc32_hello_world() {
    assert_eq!(Crc32::checksum(HELLO), 0xB4E8_9E84);
    assert_eq!(Crc32::register(HELLO), 0x4B17_617B);
  }

  #[test]
  fn test_crc32_checksum_is_idempotent() {
    assert_eq!(Crc32::checksum(HELLO), Crc32::checksum(HELLO));
  }

  #[test]
  fn test_crc32_vectored() {
    let oneshot = Crc32::checksum(TEST_DATA);
    for split in 0..=TEST_DATA.len() {
      let (a, b) = TEST_DATA.split_at(split);
      assert_eq!(Crc32::checksum_vectored(&[a, b]), oneshot, "split {split}");
    }
    assert_eq!(Crc32::checksum_vectored(&[]), 0);
  }

  #[test]
  fn test_crc32_combine_all_splits() {
    for split in 0..=TEST_DATA.len() {
      let (a, b) = TEST_DATA.split_at(split);
      let crc_a = Crc32::checksum(a);
      let crc_b = Crc32::checksum(b);
      let combined = Crc32::combine(crc_a, crc_b, b.len());
      assert_eq!(combined, Crc32::checksum(TEST_DATA), "Failed at split {split}");
    }
  }

  #[test]
  fn test_update_chains() {
    let (a, b) = HELLO.split_at(5);
    assert_eq!(update(update(INIT, a), b), Crc32::register(HELLO));
  }

  #[test]
  fn test_shift_zeros_matches_update() {
    let zeros = [0u8; 100];
    for len in [0usize, 1, 4, 7, 8, 33, 100] {
      for state in [0u32, INIT, 0xDEAD_BEEF] {
        assert_eq!(shift_zeros(state, len), update(state, &zeros[..len]), "len {len}");
      }
    }
  }

  #[test]
  fn test_zeros_operator_from_zero_state() {
    // Zero bytes from a zero register stay zero.
    assert_eq!(shift_zeros(0, 1000), 0);
    assert_eq!(zeros_operator(0), Gf2Matrix32::identity());
  }

  #[test]
  fn test_table_is_classic_table() {
    let t = table();
    assert_eq!(t[0], 0);
    assert_eq!(t[1], 0x7707_3096);
    assert_eq!(t[255], 0x2D02_EF8D);
  }

  #[test]
  fn test_select_kernel_by_config() {
    let mut cfg = Crc32Config::default();
    assert_eq!(select_kernel(&cfg, 0).name, "portable/bytewise");
    assert_eq!(
      select_kernel(&cfg, cfg.tunables.bytewise_to_slice8).name,
      "portable/slice8"
    );

    cfg.force = Crc32Force::Bitwise;
    assert_eq!(select_kernel(&cfg, 1 << 20).name, "portable/bitwise");
    cfg.force = Crc32Force::Bytewise;
    assert_eq!(select_kernel(&cfg, 1 << 20).name, "portable/bytewise");
    cfg.force = Crc32Force::Slice8;
    assert_eq!(select_kernel(&cfg, 0).name, "portable/slice8");
  }

  #[test]
  fn test_all_kernels_agree_through_selector() {
    let data = [0xA5u8; 300];
    let mut cfg = Crc32Config::default();
    let expected = (select_kernel(&cfg, data.len()).func)(INIT, &data);
    for force in [Crc32Force::Bitwise, Crc32Force::Bytewise, Crc32Force::Slice8] {
      cfg.force = force;
      assert_eq!((select_kernel(&cfg, data.len()).func)(INIT, &data), expected, "{force:?}");
    }
  }

  #[test]
  fn test_kernel_name_not_empty() {
    assert!(!kernel_name_for_len(0).is_empty());
    assert!(!Crc32::kernel_name_for_len(4096).is_empty());
  }
}
