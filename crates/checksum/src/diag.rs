//! Optional diagnostics for compensation.
//!
//! This module is behind `cfg(feature = "diag")` and exposes the intermediate
//! values of a compensation without mutating the buffer.

use traits::CrcCompensationError;

use crate::compensate::{PATCH_SIZE, Placement, solve_patch, trailing_matrix};

/// Intermediate values of one compensation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompensationDiag {
  pub offset: usize,
  pub len: usize,
  /// Bytes after the patch field.
  pub trailing: usize,
  /// CRC-32 with the patch field zeroed.
  pub base: u32,
  pub target: u32,
  /// `target ^ base`, the change the patch has to produce.
  pub delta: u32,
  /// Patch bytes, or `None` if the transform was singular.
  pub patch: Option<[u8; PATCH_SIZE]>,
  /// Kernel that processes a buffer of this length.
  pub kernel: &'static str,
  pub invertible: bool,
}

/// Diagnose forcing `buf` to CRC-32 `target` with a field at `offset`.
///
/// # Errors
///
/// [`CrcCompensationError::InvalidOffset`] if the field does not fit.
pub fn compensation(buf: &[u8], offset: usize, target: u32) -> Result<CompensationDiag, CrcCompensationError> {
  let placement = Placement::locate(buf, offset)?;
  let matrix = trailing_matrix(placement.trailing);
  let delta = target ^ placement.base;

  Ok(CompensationDiag {
    offset,
    len: buf.len(),
    trailing: placement.trailing,
    base: placement.base,
    target,
    delta,
    patch: solve_patch(matrix, delta).ok().map(u32::to_le_bytes),
    kernel: crate::crc32::kernel_name_for_len(buf.len()),
    invertible: matrix.is_invertible(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Checksum, Crc32, compensate::patch_for};

  #[test]
  fn hello_world_diag() {
    let buf = *b"Hello, World!\n";
    let d = compensation(&buf, 10, 0xDEAD_BEEF).unwrap();
    assert_eq!(d.len, 14);
    assert_eq!(d.trailing, 0);
    assert!(d.invertible);
    assert_eq!(d.delta, d.base ^ 0xDEAD_BEEF);
    assert_eq!(d.patch, Some(patch_for(&buf, 10, 0xDEAD_BEEF).unwrap()));
    assert!(!d.kernel.is_empty());

    let mut zeroed = buf;
    zeroed[10..].fill(0);
    assert_eq!(d.base, Crc32::checksum(&zeroed));
  }

  #[test]
  fn invalid_offset() {
    assert_eq!(
      compensation(b"abc", 0, 0),
      Err(CrcCompensationError::InvalidOffset { offset: 0, len: 3 })
    );
  }
}
