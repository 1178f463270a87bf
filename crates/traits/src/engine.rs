//! Streaming CRC engine trait.
//!
//! Every stateful CRC engine consumes a message one bit or one byte at a time
//! and exposes two read-only views of its register:
//!
//! - **Interim remainder**: the raw division state in natural bit order
//! - **Checksum**: the finalized value after output reflection and final XOR
//!
//! Reads never mutate the register, so a checksum can be taken mid-stream and
//! processing can continue afterwards.

use core::fmt::Debug;

use crate::RangeError;

/// Most-significant bit of a byte.
const BYTE_HIGH_BIT: u8 = 0x80;

/// Stateful CRC engine.
///
/// # Usage
///
/// ```rust,ignore
/// use crcmodel::{CrcParams, OptimalCrc};
/// use traits::CrcEngine;
///
/// let mut crc = OptimalCrc::new(CrcParams::<u32>::CRC32)?;
/// crc.process_bytes(b"1234");
/// crc.process_bytes(b"56789");
/// assert_eq!(crc.checksum(), 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - `checksum()` and `interim_remainder()` must be pure reads
/// - `reset()` must restore the state observed right after construction
/// - processing a zero-length buffer must leave the state unchanged
pub trait CrcEngine {
  /// Register value type (the configured width's integer representation).
  type Value: Clone + Eq + Debug;

  /// Feed a single message bit.
  fn process_bit(&mut self, bit: bool);

  /// Feed a single message byte.
  fn process_byte(&mut self, byte: u8);

  /// Restore the configured initial remainder.
  fn reset(&mut self);

  /// Restart from a caller-supplied remainder, given in natural bit order.
  fn reset_to(&mut self, remainder: Self::Value);

  /// The in-progress remainder in natural bit order, without the final XOR.
  #[must_use]
  fn interim_remainder(&self) -> Self::Value;

  /// The checksum of everything processed so far.
  #[must_use]
  fn checksum(&self) -> Self::Value;

  /// Feed the low `bit_count` bits of `bits`, most significant first.
  ///
  /// # Panics
  ///
  /// Panics if `bit_count > 8`.
  #[inline]
  fn process_bits(&mut self, bits: u8, bit_count: u32) {
    assert!(bit_count <= 8, "bit_count must be at most 8, got {bit_count}");
    if bit_count == 0 {
      return;
    }

    // Left-align the requested bits so the first one sits in bit 7.
    let mut bits = bits << (8 - bit_count);
    for _ in 0..bit_count {
      self.process_bit(bits & BYTE_HIGH_BIT != 0);
      bits <<= 1;
    }
  }

  /// Feed every byte of `data` in order.
  #[inline]
  fn process_bytes(&mut self, data: &[u8]) {
    for &byte in data {
      self.process_byte(byte);
    }
  }

  /// Feed the first `size` bytes of `buffer`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] if `size > buffer.len()`; nothing is processed.
  #[inline]
  fn process_prefix(&mut self, buffer: &[u8], size: usize) -> Result<(), RangeError> {
    self.process_range(buffer, 0, size)
  }

  /// Feed `buffer[offset..offset + size]`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] if the range does not fit inside `buffer`; nothing
  /// is processed.
  #[inline]
  fn process_range(&mut self, buffer: &[u8], offset: usize, size: usize) -> Result<(), RangeError> {
    let data = RangeError::slice(buffer, offset, size)?;
    self.process_bytes(data);
    Ok(())
  }

  /// Feed multiple non-contiguous buffers in order.
  #[inline]
  fn process_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.process_bytes(buf);
    }
  }
}
