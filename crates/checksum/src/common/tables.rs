//! Const-fn CRC-32 lookup table generation.
//!
//! Tables are computed with `const fn` and embedded directly in the binary, so
//! there is no runtime initialization and nothing to synchronize: every reader
//! sees the same immutable `static`.
//!
//! # Table Strategies
//!
//! | Kernel | Tables | Size |
//! |--------|--------|------|
//! | bytewise | 1×256×u32 | 1 KiB |
//! | slice-by-8 | 8×256×u32 | 8 KiB |
//!
//! Table 0 of the slice-by-8 set is the classic 256-entry table, so both kernels
//! share one `static`.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..N).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// CRC-32 (ISO-HDLC) polynomial 0x04C11DB7 in reflected form.
/// Used by Ethernet, gzip, zip, PNG.
pub const CRC32_IEEE_POLY: u32 = 0xEDB8_8320;

/// Generate a single CRC-32 lookup table entry.
///
/// Runs eight rounds of the reflected shift-and-reduce step on `index`.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 256-entry byte-at-a-time table.
#[must_use]
pub const fn generate_crc32_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = crc32_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

/// Generate 8 CRC-32 lookup tables for slice-by-8 computation.
///
/// `tables[k][i]` is the contribution of byte value `i` followed by `k` zero
/// bytes.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc32_tables_8(poly: u32) -> [[u32; 256]; 8] {
  let table0 = generate_crc32_table(poly);
  let mut tables = [[0u32; 256]; 8];
  tables[0] = table0;

  let mut k = 1usize;
  while k < 8 {
    let mut i = 0usize;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = (prev >> 8) ^ table0[(prev & 0xFF) as usize];
      i += 1;
    }
    k += 1;
  }

  tables
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_table_known_entries() {
    let table = generate_crc32_table(CRC32_IEEE_POLY);
    assert_eq!(table[0], 0x0000_0000);
    assert_eq!(table[1], 0x7707_3096);
    assert_eq!(table[128], 0xEDB8_8320);
    assert_eq!(table[255], 0x2D02_EF8D);
  }

  #[test]
  fn test_table_is_pure_function_of_poly() {
    assert_eq!(generate_crc32_table(CRC32_IEEE_POLY), generate_crc32_table(CRC32_IEEE_POLY));
    assert_ne!(generate_crc32_table(CRC32_IEEE_POLY), generate_crc32_table(0x82F6_3B78));
  }

  #[test]
  fn test_crc32_tables_8_consistency() {
    let tables = generate_crc32_tables_8(CRC32_IEEE_POLY);

    assert_eq!(tables[0], generate_crc32_table(CRC32_IEEE_POLY));

    for k in 1..8 {
      for i in 0..256 {
        let prev = tables[k - 1][i];
        let expected = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
        assert_eq!(tables[k][i], expected, "table {k} entry {i}");
      }
    }
  }

  #[test]
  fn test_table_entries_are_distinct() {
    // The top byte of each entry already identifies its index.
    let table = generate_crc32_table(CRC32_IEEE_POLY);
    for i in 0..256 {
      for j in (i + 1)..256 {
        assert_ne!(table[i], table[j], "entries {i} and {j} collide");
      }
    }
  }
}
