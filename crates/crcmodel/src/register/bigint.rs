//! Arbitrary-precision register backed by `num_bigint::BigUint`.
//!
//! `BigUint` never drops bits on a left shift, so every engine that shifts
//! left must mask its register back to `width` bits, either after each step or
//! through a [`GrowthBudget`](crate::GrowthBudget).

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::Register;

impl Register for BigUint {
  const CAPACITY: Option<u32> = None;

  #[inline]
  fn zero() -> Self {
    <Self as Zero>::zero()
  }

  #[inline]
  fn one() -> Self {
    <Self as One>::one()
  }

  #[inline]
  fn from_byte(byte: u8) -> Self {
    Self::from(byte)
  }

  #[inline]
  fn low_byte(&self) -> u8 {
    self.iter_u32_digits().next().map_or(0, |digit| (digit & 0xFF) as u8)
  }

  fn low_bits_mask(width: u32) -> Self {
    (<Self as One>::one() << width) - 1u32
  }

  #[inline]
  fn bit_len(&self) -> u32 {
    u32::try_from(self.bits()).unwrap_or(u32::MAX)
  }

  #[inline]
  fn is_zero(&self) -> bool {
    <Self as Zero>::is_zero(self)
  }

  #[inline]
  fn and(&self, rhs: &Self) -> Self {
    self & rhs
  }

  #[inline]
  fn or(&self, rhs: &Self) -> Self {
    self | rhs
  }

  #[inline]
  fn xor(&self, rhs: &Self) -> Self {
    self ^ rhs
  }

  #[inline]
  fn shl(&self, bits: u32) -> Self {
    self << bits
  }

  #[inline]
  fn shr(&self, bits: u32) -> Self {
    self >> bits
  }
}
