//! Width-derived register masks.

use crate::Register;

/// Most-significant bit of a byte.
pub const BYTE_HIGH_BIT: u8 = 0x80;

/// The two masks every engine derives from its width.
///
/// - `high_bit`: exactly one bit set, at position `width - 1`
/// - `significant`: the low `width` bits set
///
/// `width >= 1` is a precondition enforced by parameter validation.
///
/// # Examples
///
/// ```
/// use crcmodel::RegisterMasks;
///
/// let masks = RegisterMasks::<u32>::new(24);
/// assert_eq!(*masks.high_bit(), 0x0080_0000);
/// assert_eq!(*masks.significant(), 0x00FF_FFFF);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterMasks<R> {
  width: u32,
  high_bit: R,
  significant: R,
}

impl<R: Register> RegisterMasks<R> {
  /// Derive the masks for `width`.
  #[must_use]
  pub fn new(width: u32) -> Self {
    Self {
      width,
      high_bit: R::one().shl(width.saturating_sub(1)),
      significant: R::low_bits_mask(width),
    }
  }

  /// The width these masks were derived from.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Single bit at position `width - 1`.
  #[inline]
  #[must_use]
  pub const fn high_bit(&self) -> &R {
    &self.high_bit
  }

  /// Low `width` bits set.
  #[inline]
  #[must_use]
  pub const fn significant(&self) -> &R {
    &self.significant
  }

  /// Clear every bit at or above `width`.
  #[inline]
  #[must_use]
  pub fn truncate(&self, value: &R) -> R {
    value.and(&self.significant)
  }
}
