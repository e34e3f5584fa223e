//! GF(2) matrix operations for CRC-32.
//!
//! A reflected CRC register update is linear over GF(2): feeding zero bytes
//! through the table multiplies the register by a fixed 32×32 bit matrix. That
//! single fact powers two operations:
//!
//! - **combine**: `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)`, by raising
//!   the one-byte matrix to `len(B)` with square-and-multiply.
//! - **compensation**: solving for the 4 bytes that drive a buffer to a chosen
//!   CRC, by inverting the matrix that maps a patch field onto the final CRC.
//!
//! # Mathematical Background
//!
//! For reflected CRCs:
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! The multiplication by `x^(8*len(B))` is computed as matrix multiplication
//! where the matrix represents the effect of shifting by `8*len(B)` bits.

// SAFETY: All array indexing in this module uses bounded loop indices (0..32).
// Clippy cannot prove this in const fn contexts, but the bounds are statically
// guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

/// A 32x32 GF(2) matrix represented as 32 u32 values.
///
/// Word `i` is the image of the basis vector `e_i` (the column for input bit
/// `i`), so `mul_vec(v)` is the XOR of the words selected by the set bits of `v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix32([u32; 32]);

impl Gf2Matrix32 {
  /// Create the identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Build a matrix from the images of the 32 basis vectors.
  #[inline]
  #[must_use]
  pub const fn from_columns(columns: [u32; 32]) -> Self {
    Self(columns)
  }

  /// The images of the 32 basis vectors.
  #[inline]
  #[must_use]
  pub const fn columns(self) -> [u32; 32] {
    self.0
  }

  /// The image of basis vector `e_i`, or `None` if `i >= 32`.
  #[inline]
  #[must_use]
  pub const fn column(self, i: usize) -> Option<u32> {
    if i < 32 { Some(self.0[i]) } else { None }
  }

  /// Multiply matrix by a vector (u32 treated as column vector).
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u32) -> u32 {
    let mut result = 0u32;
    let mut i = 0;
    while i < 32 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (self * other).
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  /// Square the matrix (self * self).
  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }

  /// Raise the matrix to the `n`-th power by square-and-multiply.
  ///
  /// `pow(0)` is the identity.
  #[must_use]
  pub const fn pow(self, n: usize) -> Self {
    let mut base = self;
    let mut result = Self::identity();
    let mut remaining = n;

    while remaining > 0 {
      if remaining & 1 != 0 {
        result = result.mul_mat(base);
      }
      remaining >>= 1;
      if remaining > 0 {
        base = base.square();
      }
    }

    result
  }

  /// Rank over GF(2).
  #[must_use]
  pub const fn rank(self) -> u32 {
    // basis[b] holds a reduced vector whose highest set bit is b.
    let mut basis = [0u32; 32];
    let mut rank = 0;
    let mut i = 0;
    while i < 32 {
      let mut v = self.0[i];
      while v != 0 {
        let top = (31 - v.leading_zeros()) as usize;
        if basis[top] == 0 {
          basis[top] = v;
          rank += 1;
          break;
        }
        v ^= basis[top];
      }
      i += 1;
    }
    rank
  }

  /// `true` if the matrix has full rank.
  #[inline]
  #[must_use]
  pub const fn is_invertible(self) -> bool {
    self.rank() == 32
  }

  /// Invert the matrix with Gauss-Jordan elimination over GF(2).
  ///
  /// Works on whole columns at a time: for every bit position a pivot column
  /// with that bit set is swapped into place and XORed into every other
  /// column that has the bit. The same operations applied to the identity
  /// yield the inverse. Returns `None` when no pivot exists for some bit,
  /// i.e. the matrix is singular.
  #[must_use]
  pub const fn inverse(self) -> Option<Self> {
    // Invariant: self * inv[k] == cols[k] for every k.
    let mut cols = self.0;
    let mut inv = Self::identity().0;

    let mut bit = 0usize;
    while bit < 32 {
      let mask = 1u32 << bit;

      let mut pivot = bit;
      while pivot < 32 && cols[pivot] & mask == 0 {
        pivot += 1;
      }
      if pivot == 32 {
        return None;
      }

      if pivot != bit {
        let tmp = cols[pivot];
        cols[pivot] = cols[bit];
        cols[bit] = tmp;
        let tmp = inv[pivot];
        inv[pivot] = inv[bit];
        inv[bit] = tmp;
      }

      let mut k = 0usize;
      while k < 32 {
        if k != bit && cols[k] & mask != 0 {
          cols[k] ^= cols[bit];
          inv[k] ^= inv[bit];
        }
        k += 1;
      }

      bit += 1;
    }

    Some(Self(inv))
  }
}

impl Default for Gf2Matrix32 {
  #[inline]
  fn default() -> Self {
    Self::identity()
  }
}

/// Generate the "shift by 1 bit" matrix for a given CRC polynomial.
///
/// For a reflected CRC with polynomial P (reflected form), shifting by 1 bit means:
/// - If the LSB is 0, shift right by 1
/// - If the LSB is 1, shift right by 1, then XOR with P
///
/// The matrix M is such that M * crc = crc_shifted_by_1_bit.
#[must_use]
pub const fn generate_shift1_matrix_32(poly: u32) -> Gf2Matrix32 {
  let mut m = [0u32; 32];

  // Bit 0 shifts out and selects the polynomial.
  m[0] = poly;

  // Bit j of the input becomes bit j-1 of the output.
  let mut j = 1;
  while j < 32 {
    m[j] = 1 << (j - 1);
    j += 1;
  }

  Gf2Matrix32(m)
}

/// Generate the "shift by 8 bits" matrix (one byte) for a CRC-32 polynomial.
///
/// This is one table round over a zero byte:
/// `crc' = table[crc & 0xFF] ^ (crc >> 8)`.
#[must_use]
pub const fn generate_shift8_matrix_32(poly: u32) -> Gf2Matrix32 {
  let shift1 = generate_shift1_matrix_32(poly);
  let shift2 = shift1.square();
  let shift4 = shift2.square();

  shift4.square()
}

/// Combine two CRC-32 values.
///
/// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
///
/// # Arguments
///
/// * `crc_a` - CRC of the first part (finalized)
/// * `crc_b` - CRC of the second part (finalized)
/// * `len_b` - Length of the second part in bytes
/// * `shift8_matrix` - Pre-computed "shift by 8 bits" matrix for the polynomial
#[must_use]
pub const fn combine_crc32(crc_a: u32, crc_b: u32, len_b: usize, shift8_matrix: Gf2Matrix32) -> u32 {
  if len_b == 0 {
    return crc_a;
  }

  shift8_matrix.pow(len_b).mul_vec(crc_a) ^ crc_b
}
