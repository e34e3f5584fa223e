//! Non-cryptographic checksum traits.
//!
//! - **One-shot**: checksums are computed over complete, in-memory buffers
//! - **Combine**: checksums of concatenations from the checksums of the parts
//! - **Compensate**: rewrite a small field so a buffer hits a chosen checksum

use core::fmt::Debug;

use crate::CrcCompensationError;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"123456789");
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - `checksum()` must be a pure function of its input
/// - `checksum(&[])` must be the checksum of the empty message
pub trait Checksum {
  /// Output size in bytes.
  ///
  /// - CRC32: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u32` for CRC32.
  type Output: Copy + Eq + Debug + Default;

  /// Compute the checksum of data in one shot.
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output;

  /// Compute the checksum of multiple buffers as if they were concatenated.
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output;
}

/// Checksums that support combination.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)`
/// in O(log n) time.
///
/// # Mathematical Background
///
/// For CRC, this works because:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// The exponentiation uses square-and-multiply for O(log n) complexity.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, ChecksumCombine, Crc32};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(6);
///
/// let combined = Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len());
/// assert_eq!(combined, Crc32::checksum(data));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}

/// Checksums that can be forced to a chosen value by rewriting a patch field.
///
/// Linear checksums (every CRC) are affine maps over GF(2), so for a patch
/// field as wide as the checksum there is a unique patch value that drives the
/// checksum of the whole buffer to any target.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, ChecksumCompensate, Crc32};
///
/// let mut buf = *b"Hello, World!\n";
/// Crc32::compensate(&mut buf, 10, 0xDEAD_BEEF)?;
/// assert_eq!(Crc32::checksum(&buf), 0xDEAD_BEEF);
/// ```
pub trait ChecksumCompensate: Checksum {
  /// Width of the patch field in bytes (equal to [`Checksum::OUTPUT_SIZE`]).
  const PATCH_SIZE: usize;

  /// Overwrite `PATCH_SIZE` bytes at `offset` so that `checksum(buf) == target`.
  ///
  /// On error the buffer is left unmodified.
  fn compensate(buf: &mut [u8], offset: usize, target: Self::Output) -> Result<(), CrcCompensationError>;

  /// Overwrite the final `PATCH_SIZE` bytes so that `checksum(buf) == target`.
  fn compensate_tail(buf: &mut [u8], target: Self::Output) -> Result<(), CrcCompensationError> {
    let offset = buf
      .len()
      .checked_sub(Self::PATCH_SIZE)
      .ok_or(CrcCompensationError::InvalidOffset {
        offset: 0,
        len: buf.len(),
      })?;
    Self::compensate(buf, offset, target)
  }
}
