//! Error types for checksum compensation.
//!
//! Plain, copyable error values with no allocation, so they work the same in
//! `no_std` builds.

use core::fmt;

/// Checksum compensation failed.
///
/// Returned by [`ChecksumCompensate`](crate::ChecksumCompensate) implementations.
/// The target buffer is never left partially modified when one of these is
/// returned.
///
/// # Examples
///
/// ```
/// use traits::CrcCompensationError;
///
/// fn check(offset: usize, len: usize) -> Result<(), CrcCompensationError> {
///   match offset.checked_add(4) {
///     Some(end) if end <= len => Ok(()),
///     _ => Err(CrcCompensationError::InvalidOffset { offset, len }),
///   }
/// }
///
/// assert!(check(10, 14).is_ok());
/// assert!(check(11, 14).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcCompensationError {
  /// The patch field `offset..offset + 4` does not fit inside a buffer of `len` bytes.
  InvalidOffset {
    /// Requested patch offset.
    offset: usize,
    /// Length of the buffer.
    len: usize,
  },
  /// The transform from patch field to checksum is singular over GF(2), so
  /// no patch value reaches the requested checksum.
  Unsolvable,
  /// The patched buffer did not hit the target.
  ///
  /// This signals a defect in the compensation algebra, not bad input.
  Internal {
    /// Checksum the patch was computed for.
    expected: u32,
    /// Checksum actually observed after patching.
    actual: u32,
  },
}

impl CrcCompensationError {
  /// Returns `true` for errors caused by caller input rather than an
  /// implementation defect.
  #[inline]
  #[must_use]
  pub const fn is_input_error(&self) -> bool {
    matches!(self, Self::InvalidOffset { .. } | Self::Unsolvable)
  }
}

impl fmt::Display for CrcCompensationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidOffset { offset, len } => {
        write!(f, "patch field at offset {offset} does not fit in a {len}-byte buffer")
      }
      Self::Unsolvable => f.write_str("patch transform is singular; no patch reaches the target"),
      Self::Internal { expected, actual } => {
        write!(
          f,
          "compensation self-check failed: expected 0x{expected:08X}, got 0x{actual:08X}"
        )
      }
    }
  }
}

impl core::error::Error for CrcCompensationError {}
