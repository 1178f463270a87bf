//! Bit-serial reference engine.
//!
//! Polynomial long division, one message bit at a time, exactly as the
//! Rocksoft model defines it. Eight division steps per byte and no tables;
//! [`OptimalCrc`](crate::OptimalCrc) is checked against it.
//!
//! # Algorithm
//!
//! ```text
//! for each message bit b (MSB-first within each byte, after optional reflection):
//!   remainder ^= b ? high_bit : 0
//!   divide     = remainder & high_bit
//!   remainder <<= 1
//!   if divide: remainder ^= polynomial
//! ```
//!
//! The register always holds the remainder in natural bit order; reflection
//! is only ever applied to input bytes and to the final checksum.

use traits::CrcEngine;

use crate::{CrcParams, ParamsError, Register, RegisterMasks, common::reflect::reflect_byte};

/// Bit-at-a-time CRC engine.
///
/// # Examples
///
/// ```
/// use crcmodel::{BasicCrc, CrcEngine, CrcParams};
///
/// let mut crc = BasicCrc::new(CrcParams::<u16>::XMODEM)?;
/// crc.process_bytes(b"123456789");
/// assert_eq!(crc.checksum(), 0x31C3);
/// # Ok::<(), crcmodel::ParamsError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BasicCrc<R> {
  params: CrcParams<R>,
  masks: RegisterMasks<R>,
  remainder: R,
}

impl<R: Register> BasicCrc<R> {
  /// Create an engine whose remainder starts at `params.init`.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError`] if the parameters do not validate.
  pub fn new(params: CrcParams<R>) -> Result<Self, ParamsError> {
    params.validate()?;
    let masks = RegisterMasks::new(params.width);
    log::trace!(
      "basic crc engine: width={} polynomial={:#x} reflect_in={} reflect_out={}",
      params.width,
      params.polynomial,
      params.reflect_in,
      params.reflect_out
    );
    Ok(Self { remainder: params.init.clone(), params, masks })
  }

  /// One-shot checksum of `data`.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError`] if the parameters do not validate.
  pub fn checksum_of(params: CrcParams<R>, data: &[u8]) -> Result<R, ParamsError> {
    let mut crc = Self::new(params)?;
    crc.process_bytes(data);
    Ok(crc.checksum())
  }

  /// The parameters this engine was built with.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams<R> {
    &self.params
  }
}

impl<R: Register> CrcEngine for BasicCrc<R> {
  type Value = R;

  fn process_bit(&mut self, bit: bool) {
    let high_bit = self.masks.high_bit();

    // Compare the new bit with the remainder's highest.
    if bit {
      self.remainder = self.remainder.xor(high_bit);
    }

    // A division step happens when the highest bit is set.
    let divide = self.remainder.test(high_bit);
    self.remainder = self.remainder.shl(1);
    if divide {
      self.remainder = self.remainder.xor(&self.params.polynomial);
    }

    // Native registers drop the shifted-out bit; unbounded ones keep it.
    if R::is_unbounded() {
      self.remainder = self.masks.truncate(&self.remainder);
    }
  }

  #[inline]
  fn process_byte(&mut self, byte: u8) {
    let byte = if self.params.reflect_in { reflect_byte(byte) } else { byte };
    self.process_bits(byte, 8);
  }

  #[inline]
  fn reset(&mut self) {
    self.remainder = self.params.init.clone();
  }

  #[inline]
  fn reset_to(&mut self, remainder: R) {
    self.remainder = remainder;
  }

  #[inline]
  fn interim_remainder(&self) -> R {
    self.masks.truncate(&self.remainder)
  }

  fn checksum(&self) -> R {
    let out = if self.params.reflect_out { self.remainder.reflect(self.params.width) } else { self.remainder.clone() };
    self.masks.truncate(&out.xor(&self.params.xor_out))
  }
}
