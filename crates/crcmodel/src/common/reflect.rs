//! Bit reflection.
//!
//! "Reflected" means bit-reversed: bit `i` of the input becomes bit
//! `bits - 1 - i` of the output. Reflected CRCs process each byte LSB-first,
//! which is equivalent to keeping the whole register in reversed bit order.
//! [`Convention`] captures that choice once so the engines never branch on
//! flags inline.

use crate::Register;

/// Reverse the low `bits` bits of `value`; bits at or above `bits` are dropped.
///
/// # Examples
///
/// ```
/// use crcmodel::reflect;
///
/// assert_eq!(reflect(&0x04C1_1DB7u32, 32), 0xEDB8_8320);
/// assert_eq!(reflect(&0b0001u8, 4), 0b1000);
/// ```
#[inline]
#[must_use]
pub fn reflect<R: Register>(value: &R, bits: u32) -> R {
  value.reflect(bits)
}

/// Reverse the bit order of a byte.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

/// O(bits) reflection that works for any register, including unbounded ones.
pub(crate) fn reflect_portable<R: Register>(value: &R, bits: u32) -> R {
  let one = R::one();
  let mut reflection = R::zero();
  let mut rest = value.clone();
  for i in 0..bits {
    if rest.test(&one) {
      reflection = reflection.or(&one.shl(bits - 1 - i));
    }
    rest = rest.shr(1);
  }
  reflection
}

/// One bit-order convention of the table-driven algorithm.
///
/// With `reflected == false` the register is kept in natural order and bytes
/// enter at the top; with `reflected == true` the register is kept reversed
/// and bytes enter at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Convention {
  width: u32,
  reflected: bool,
}

impl Convention {
  #[inline]
  pub(crate) const fn new(width: u32, reflected: bool) -> Self {
    Self { width, reflected }
  }

  #[inline]
  pub(crate) const fn is_reflected(self) -> bool {
    self.reflected
  }

  /// Convert between natural order and this convention (an involution).
  #[inline]
  pub(crate) fn apply<R: Register>(self, value: &R) -> R {
    if self.reflected { value.reflect(self.width) } else { value.clone() }
  }

  /// Combine the register's leading byte with `byte` into a table index.
  #[inline]
  pub(crate) fn index<R: Register>(self, remainder: &R, byte: u8) -> u8 {
    let leading = if self.reflected {
      remainder.low_byte()
    } else if self.width > 8 {
      remainder.shr(self.width - 8).low_byte()
    } else {
      remainder.shl(8 - self.width).low_byte()
    };
    leading ^ byte
  }

  /// Shift the leading byte out of the register.
  #[inline]
  pub(crate) fn shift<R: Register>(self, remainder: &R) -> R {
    if self.reflected { remainder.shr(8) } else { remainder.shl(8) }
  }
}
