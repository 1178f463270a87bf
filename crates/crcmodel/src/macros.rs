//! Internal macros for register generation.
//!
//! Every native unsigned integer implements [`Register`](crate::Register) the
//! same way; only the type changes.

/// Implement [`Register`](crate::Register) for native unsigned integers.
///
/// Shifts discard every bit moved past the type's capacity (a shift by
/// `BITS` or more yields zero rather than panicking), and reflection uses the
/// hardware `reverse_bits` followed by a right shift that drops the bits above
/// the reflected span.
macro_rules! impl_native_register {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl $crate::register::Register for $ty {
        const CAPACITY: Option<u32> = Some(<$ty>::BITS);

        #[inline]
        fn zero() -> Self {
          0
        }

        #[inline]
        fn one() -> Self {
          1
        }

        #[inline]
        fn from_byte(byte: u8) -> Self {
          Self::from(byte)
        }

        #[inline]
        fn low_byte(&self) -> u8 {
          (*self & 0xFF) as u8
        }

        #[inline]
        fn low_bits_mask(width: u32) -> Self {
          // Two half shifts so that `width == BITS` never shifts by the full
          // capacity in one go.
          let half = width / 2;
          match Self::MAX.checked_shl(half).and_then(|v| v.checked_shl(width - half)) {
            Some(v) => !v,
            None => Self::MAX,
          }
        }

        #[inline]
        fn bit_len(&self) -> u32 {
          <$ty>::BITS - self.leading_zeros()
        }

        #[inline]
        fn is_zero(&self) -> bool {
          *self == 0
        }

        #[inline]
        fn and(&self, rhs: &Self) -> Self {
          *self & *rhs
        }

        #[inline]
        fn or(&self, rhs: &Self) -> Self {
          *self | *rhs
        }

        #[inline]
        fn xor(&self, rhs: &Self) -> Self {
          *self ^ *rhs
        }

        #[inline]
        fn shl(&self, bits: u32) -> Self {
          self.checked_shl(bits).unwrap_or(0)
        }

        #[inline]
        fn shr(&self, bits: u32) -> Self {
          self.checked_shr(bits).unwrap_or(0)
        }

        #[inline]
        fn reflect(&self, bits: u32) -> Self {
          match <$ty>::BITS.checked_sub(bits) {
            Some(_) if bits == 0 => 0,
            Some(drop) => self.reverse_bits() >> drop,
            None => $crate::common::reflect::reflect_portable(self, bits),
          }
        }
      }
    )+
  };
}
