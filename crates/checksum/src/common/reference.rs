//! Bitwise reference implementation for CRC-32.
//!
//! This is the canonical "source of truth" for CRC computation. It processes
//! one bit at a time, making it:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **Audit-friendly**: no lookup tables
//! - **Const-evaluable**: Can verify check values at compile time
//!
//! Every table-driven kernel must produce identical results to this function.
//!
//! # CRC Model
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `width`   | 32 |
//! | `poly`    | 0x04C11DB7 (0xEDB88320 reflected) |
//! | `init`    | 0xFFFFFFFF |
//! | `refin`   | true |
//! | `refout`  | true |
//! | `xorout`  | 0xFFFFFFFF |

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320 for CRC-32-IEEE)
/// * `init` - Initial register value (typically 0xFFFFFFFF)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies final XOR if needed).
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly & mask);
      bit += 1;
    }
    i += 1;
  }
  crc
}
