//! The CRC register abstraction.
//!
//! Engines are generic over [`Register`], resolved at compile time. A register
//! is an unsigned integer wide enough to hold `width` bits; the operations are
//! exactly the ones CRC arithmetic needs and nothing more.
//!
//! | Type | Capacity | Notes |
//! |------|----------|-------|
//! | `u8`, `u16`, `u32`, `u64`, `u128` | `BITS` | overflow bits fall off every shift |
//! | `BigUint` (feature `bigint`) | unbounded | engines mask growth explicitly |
//!
//! Widths that fit a native type should use one: the arbitrary-precision
//! backend allocates on every operation.

use core::fmt;

#[cfg(feature = "bigint")]
mod bigint;

/// Unsigned register holding a CRC remainder.
///
/// # Implementor Requirements
///
/// - `shl`/`shr` by `n` must discard bits moved past the capacity and return
///   zero when `n` is at least the capacity (never panic)
/// - `low_byte` must mask to the low 8 bits before narrowing (never fault)
/// - `low_bits_mask(w)` must have exactly the low `w` bits set for every
///   `w` up to and including the capacity
/// - `reflect(bits)` must ignore bits at or above `bits`
pub trait Register: Clone + Eq + fmt::Debug + fmt::LowerHex {
  /// Bit capacity, or `None` for an unbounded (arbitrary-precision) register.
  const CAPACITY: Option<u32>;

  /// The all-zero register.
  #[must_use]
  fn zero() -> Self;

  /// The register with only bit 0 set.
  #[must_use]
  fn one() -> Self;

  /// Widen a byte into the register's low 8 bits.
  #[must_use]
  fn from_byte(byte: u8) -> Self;

  /// Bits 0..8, masked before narrowing.
  #[must_use]
  fn low_byte(&self) -> u8;

  /// A value with exactly the low `width` bits set.
  #[must_use]
  fn low_bits_mask(width: u32) -> Self;

  /// Number of significant bits (`0` for zero).
  #[must_use]
  fn bit_len(&self) -> u32;

  /// `true` if no bit is set.
  #[must_use]
  fn is_zero(&self) -> bool;

  /// Bitwise AND.
  #[must_use]
  fn and(&self, rhs: &Self) -> Self;

  /// Bitwise OR.
  #[must_use]
  fn or(&self, rhs: &Self) -> Self;

  /// Bitwise XOR.
  #[must_use]
  fn xor(&self, rhs: &Self) -> Self;

  /// Left shift, discarding bits past the capacity.
  #[must_use]
  fn shl(&self, bits: u32) -> Self;

  /// Right shift.
  #[must_use]
  fn shr(&self, bits: u32) -> Self;

  /// Reverse the order of the low `bits` bits; higher bits are dropped.
  #[must_use]
  fn reflect(&self, bits: u32) -> Self {
    crate::common::reflect::reflect_portable(self, bits)
  }

  /// `true` if any bit of `mask` is also set in `self`.
  #[inline]
  #[must_use]
  fn test(&self, mask: &Self) -> bool {
    !self.and(mask).is_zero()
  }

  /// `true` for arbitrary-precision registers, whose growth must be masked.
  #[inline]
  #[must_use]
  fn is_unbounded() -> bool {
    Self::CAPACITY.is_none()
  }
}

impl_native_register!(u8, u16, u32, u64, u128);
