//! CRC-32 compensation: rewrite four bytes of a buffer so its CRC-32 becomes a
//! chosen value.
//!
//! CRC-32 is affine over GF(2). With the patch field zeroed the buffer has a
//! fixed `base` CRC, and every patch value `p` moves it by `M · p` where `M`
//! only depends on how many bytes follow the field. Inverting `M` gives the
//! patch directly:
//!
//! ```text
//! crc(buffer with p) = base ^ M·p
//! p                  = M⁻¹ · (target ^ base)
//! ```
//!
//! `M` is the raw update of four little-endian bytes followed by
//! `trailing` zero-byte rounds; see [`trailing_matrix`].
//!
//! # Example
//!
//! ```
//! use checksum::{Checksum, Crc32, compensate};
//!
//! let mut buf = *b"Hello, World!\n";
//! compensate::compensate_tail(&mut buf, 0xDEAD_BEEF)?;
//! assert_eq!(Crc32::checksum(&buf), 0xDEAD_BEEF);
//! assert_eq!(&buf[..10], b"Hello, Wor");
//! # Ok::<(), checksum::CrcCompensationError>(())
//! ```

use traits::{Checksum, ChecksumCompensate, CrcCompensationError};

use crate::{
  common::combine::Gf2Matrix32,
  crc32::{Crc32, INIT, update, zeros_operator},
};

/// Width of the patch field in bytes.
pub const PATCH_SIZE: usize = 4;

/// A validated patch placement: the bytes around the field and the CRC with
/// the field zeroed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placement {
  pub(crate) trailing: usize,
  pub(crate) base: u32,
}

impl Placement {
  /// Split `buf` around a 4-byte field at `offset`.
  ///
  /// Returns `InvalidOffset` when the field does not fit, including when
  /// `offset + 4` would overflow.
  pub(crate) fn locate(buf: &[u8], offset: usize) -> Result<Self, CrcCompensationError> {
    let invalid = CrcCompensationError::InvalidOffset { offset, len: buf.len() };
    let (prefix, rest) = buf.split_at_checked(offset).ok_or(invalid)?;
    let (_field, suffix) = rest.split_at_checked(PATCH_SIZE).ok_or(invalid)?;

    let state = update(update(INIT, prefix), &[0u8; PATCH_SIZE]);
    let base = !update(state, suffix);

    Ok(Self {
      trailing: suffix.len(),
      base,
    })
  }
}

/// The GF(2) matrix mapping a patch value to its effect on the CRC when
/// `trailing` bytes follow the field.
///
/// Column `i` is the raw update of the little-endian bytes of `1 << i` from a
/// zero register, carried through `trailing` zero-byte rounds.
#[must_use]
pub fn trailing_matrix(trailing: usize) -> Gf2Matrix32 {
  let zeros = zeros_operator(trailing);
  let mut cols = [0u32; 32];
  for (i, col) in cols.iter_mut().enumerate() {
    let unit = 1u32 << i;
    *col = zeros.mul_vec(update(0, &unit.to_le_bytes()));
  }
  Gf2Matrix32::from_columns(cols)
}

/// Solve `matrix · patch = delta` for `patch`.
///
/// # Errors
///
/// [`CrcCompensationError::Unsolvable`] if `matrix` is singular.
pub fn solve_patch(matrix: Gf2Matrix32, delta: u32) -> Result<u32, CrcCompensationError> {
  matrix
    .inverse()
    .map(|inv| inv.mul_vec(delta))
    .ok_or(CrcCompensationError::Unsolvable)
}

/// Compute the 4 bytes that, written at `offset`, give `buf` the CRC-32
/// `target`. `buf` is not modified and its current field bytes are ignored.
///
/// # Errors
///
/// - [`CrcCompensationError::InvalidOffset`] if `offset + 4 > buf.len()`
/// - [`CrcCompensationError::Unsolvable`] if the patch transform is singular
/// - [`CrcCompensationError::Internal`] if `M · patch` does not reproduce the
///   requested delta, i.e. the inversion itself went wrong
pub fn patch_for(buf: &[u8], offset: usize, target: u32) -> Result<[u8; PATCH_SIZE], CrcCompensationError> {
  patch_with(buf, offset, target, trailing_matrix)
}

/// Type of the function building the patch transform for a trailing length.
type TransformFn = fn(usize) -> Gf2Matrix32;

fn patch_with(
  buf: &[u8],
  offset: usize,
  target: u32,
  transform: TransformFn,
) -> Result<[u8; PATCH_SIZE], CrcCompensationError> {
  let placement = Placement::locate(buf, offset)?;
  let matrix = transform(placement.trailing);
  let patch = solve_patch(matrix, target ^ placement.base)?;

  // Checks the inverse against the matrix it came from. A wrongly built
  // matrix passes here and is caught by the recompute in `compensate_with`.
  let predicted = placement.base ^ matrix.mul_vec(patch);
  if predicted != target {
    return Err(CrcCompensationError::Internal {
      expected: target,
      actual: predicted,
    });
  }

  Ok(patch.to_le_bytes())
}

fn field_mut(buf: &mut [u8], offset: usize) -> Result<&mut [u8; PATCH_SIZE], CrcCompensationError> {
  let len = buf.len();
  buf
    .get_mut(offset..)
    .and_then(|rest| rest.first_chunk_mut::<PATCH_SIZE>())
    .ok_or(CrcCompensationError::InvalidOffset { offset, len })
}

/// Overwrite the 4 bytes at `offset` so that `crc32(buf) == target`.
///
/// Every other byte is left untouched and the length never changes. The
/// result is verified by recomputing the CRC of the patched buffer.
///
/// # Errors
///
/// - [`CrcCompensationError::InvalidOffset`] if `offset + 4 > buf.len()`;
///   `buf` is untouched
/// - [`CrcCompensationError::Unsolvable`] if no patch exists; `buf` is untouched
/// - [`CrcCompensationError::Internal`] if verification fails; the original
///   field bytes are restored
pub fn compensate(buf: &mut [u8], offset: usize, target: u32) -> Result<(), CrcCompensationError> {
  compensate_with(buf, offset, target, trailing_matrix)
}

fn compensate_with(
  buf: &mut [u8],
  offset: usize,
  target: u32,
  transform: TransformFn,
) -> Result<(), CrcCompensationError> {
  let patch = patch_with(buf, offset, target, transform)?;

  let field = field_mut(buf, offset)?;
  let original = *field;
  *field = patch;

  let actual = Crc32::checksum(buf);
  if actual != target {
    *field_mut(buf, offset)? = original;

    #[cfg(feature = "tracing")]
    tracing::error!(
      offset,
      len = buf.len(),
      expected = target,
      actual,
      "crc32 compensation failed verification"
    );

    return Err(CrcCompensationError::Internal { expected: target, actual });
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(
    offset,
    len = buf.len(),
    trailing = buf.len() - offset - PATCH_SIZE,
    patch = u32::from_le_bytes(patch),
    target,
    "crc32 compensated"
  );

  Ok(())
}

/// [`compensate`] with the field in the final 4 bytes of `buf`.
///
/// # Errors
///
/// [`CrcCompensationError::InvalidOffset`] if `buf` is shorter than 4 bytes,
/// otherwise as [`compensate`].
#[inline]
pub fn compensate_tail(buf: &mut [u8], target: u32) -> Result<(), CrcCompensationError> {
  <Crc32 as ChecksumCompensate>::compensate_tail(buf, target)
}

/// Force the register form: afterwards `Crc32::register(buf) == target_register`.
///
/// # Errors
///
/// As [`compensate`].
#[inline]
pub fn compensate_register(buf: &mut [u8], offset: usize, target_register: u32) -> Result<(), CrcCompensationError> {
  compensate(buf, offset, !target_register)
}
