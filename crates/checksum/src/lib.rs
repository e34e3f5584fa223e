//! CRC-32 checksums and CRC-32 compensation.
//!
//! This crate computes the standard CRC-32 (IEEE 802.3 / ISO-HDLC) and can
//! rewrite a 4-byte field of a buffer so the buffer's CRC-32 becomes any chosen
//! value, by inverting the patch transform over GF(2).
//!
//! # Overview
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`crc32()`] / [`Crc32`] | One-shot CRC-32 |
//! | [`crc32_register`] / [`Crc32::register`] | CRC register before the final XOR |
//! | [`crc32::zeros_operator`] / [`crc32::shift_zeros`] | Effect of `len` zero bytes on the register |
//! | [`Gf2Matrix32`] | 32×32 bit matrices: multiply, power, inverse |
//! | [`compensate()`] | Force a buffer's CRC-32 by patching 4 bytes |
//!
//! # Kernels
//!
//! | Kernel | Used for |
//! |--------|----------|
//! | `portable/bitwise` | Reference; forced only |
//! | `portable/bytewise` | Short buffers |
//! | `portable/slice8` | Everything else |
//!
//! Selection is configurable through [`Crc32Config`]; every kernel computes
//! the same function.
//!
//! # Example
//!
//! ```rust
//! use checksum::{ChecksumCombine, Crc32, compensate, crc32};
//!
//! let data = b"123456789";
//! assert_eq!(crc32(data), 0xCBF4_3926);
//!
//! // Combine (useful for multi-threaded processing)
//! let (a, b) = data.split_at(4);
//! let combined = Crc32::combine(crc32(a), crc32(b), b.len());
//! assert_eq!(combined, crc32(data));
//!
//! // Force a checksum by rewriting the last 4 bytes
//! let mut buf = *b"Hello, World!\n";
//! compensate(&mut buf, 10, 0xDEAD_BEEF)?;
//! assert_eq!(crc32(&buf), 0xDEAD_BEEF);
//! # Ok::<(), checksum::CrcCompensationError>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): environment overrides for kernel selection
//! - `diag`: [`diag::compensation`] reports the intermediate values
//! - `tracing`: structured events from [`compensate()`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;
mod dispatch;

pub mod compensate;
pub mod crc32;
#[cfg(feature = "diag")]
pub mod diag;

pub use common::combine::Gf2Matrix32;
pub use compensate::{compensate, compensate_register, compensate_tail, patch_for, solve_patch, trailing_matrix};
pub use crc32::{Crc32, Crc32Config, Crc32Force, Crc32Tunables};
pub use traits::{Checksum, ChecksumCombine, ChecksumCompensate, CrcCompensationError};

/// CRC-32 of `data`.
///
/// ```
/// assert_eq!(checksum::crc32(b""), 0);
/// assert_eq!(checksum::crc32(b"Hello, World!\n"), 0xB4E8_9E84);
/// ```
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  Crc32::checksum(data)
}

/// CRC-32 register of `data` (no final XOR). Always `!crc32(data)`.
#[inline]
#[must_use]
pub fn crc32_register(data: &[u8]) -> u32 {
  Crc32::register(data)
}
