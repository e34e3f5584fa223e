//! Portable CRC-32 kernels (bitwise, bytewise, slice-by-8).
//!
//! All three update a raw register: no initial value and no final XOR are
//! applied here.

// SAFETY: All array indexing in this module uses bounded indices:
// - `as_chunks` guarantees chunk sizes
// - Table indices use `& 0xFF` (0..255) or `>> 24` (0..255)
#![allow(clippy::indexing_slicing)]

use super::kernel_tables;
use crate::common::{reference::crc32_bitwise, tables::CRC32_IEEE_POLY};

/// Canonical kernel names.
pub(crate) const BITWISE_KERNEL_NAME: &str = "portable/bitwise";
pub(crate) const BYTEWISE_KERNEL_NAME: &str = "portable/bytewise";
pub(crate) const SLICE8_KERNEL_NAME: &str = "portable/slice8";

/// CRC-32 table-less bit-at-a-time computation.
#[inline]
pub fn crc32_bitwise_ieee(crc: u32, data: &[u8]) -> u32 {
  crc32_bitwise(CRC32_IEEE_POLY, crc, data)
}

/// CRC-32 byte-at-a-time lookup computation.
///
/// Faster than slice-by-8 for tiny buffers because it touches a single
/// 256-entry table.
#[inline]
pub fn crc32_bytewise_ieee(crc: u32, data: &[u8]) -> u32 {
  crc32_bytewise(crc, data, &kernel_tables::IEEE_TABLES_8[0])
}

/// CRC-32 slice-by-8 computation.
#[inline]
pub fn crc32_slice8_ieee(crc: u32, data: &[u8]) -> u32 {
  crc32_slice8(crc, data, &kernel_tables::IEEE_TABLES_8)
}

/// Update CRC-32 state using a byte-at-a-time lookup table.
#[inline]
pub fn crc32_bytewise(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &b in data {
    let index = ((crc ^ (b as u32)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

/// Update CRC-32 state using the slice-by-8 algorithm.
///
/// Processes 8 bytes per iteration (2× the CRC width in bytes).
///
/// # Arguments
///
/// * `crc` - Current CRC state
/// * `data` - Input data
/// * `tables` - 8 lookup tables (256 entries each)
#[inline]
pub fn crc32_slice8(mut crc: u32, data: &[u8], tables: &[[u32; 256]; 8]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    // First word folds in the register, second word is plain data.
    let a = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let b = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a & 0xFF) as usize]
      ^ tables[6][((a >> 8) & 0xFF) as usize]
      ^ tables[5][((a >> 16) & 0xFF) as usize]
      ^ tables[4][(a >> 24) as usize]
      ^ tables[3][(b & 0xFF) as usize]
      ^ tables[2][((b >> 8) & 0xFF) as usize]
      ^ tables[1][((b >> 16) & 0xFF) as usize]
      ^ tables[0][(b >> 24) as usize];
  }

  crc32_bytewise(crc, remainder, &tables[0])
}
