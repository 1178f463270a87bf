//! Augmented-message CRC.
//!
//! An augmented message reserves `width / 8` trailing bytes for its own
//! checksum. Dividing the message with those bytes zeroed yields the
//! checksum; writing it back big-endian makes the whole buffer divide to
//! zero. The computation always runs in the non-reflected convention and
//! carries no state between calls, so a buffer may be processed in any
//! number of contiguous segments:
//!
//! ```text
//! calculate(buf[mid..], calculate(buf[..mid], r0)) == calculate(buf, r0)
//! ```

use alloc::sync::Arc;
use core::fmt;

use traits::RangeError;

use crate::{CrcParams, CrcTable, GrowthBudget, ParamsError, Register, RegisterMasks, VerificationError};

/// Stateless augmented CRC over a fixed `(width, polynomial)`.
///
/// # Examples
///
/// ```
/// use crcmodel::AugmentedCrc;
///
/// let crc = AugmentedCrc::<u32>::new(32, 0x04C1_1DB7)?;
///
/// let mut message = *b"augmented\0\0\0\0";
/// crc.embed(&mut message, 0)?;
/// assert!(crc.verify(&message, 0).is_ok());
///
/// message[0] ^= 0x10;
/// assert!(crc.verify(&message, 0).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct AugmentedCrc<R> {
  masks: RegisterMasks<R>,
  table: Arc<CrcTable<R>>,
  budget: GrowthBudget,
}

impl<R: Register> AugmentedCrc<R> {
  /// Create an engine for `width` and the truncated `polynomial`.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError`] if `(width, polynomial)` does not validate, or
  /// [`ParamsError::AugmentedWidth`] if `width` is not a multiple of 8.
  pub fn new(width: u32, polynomial: R) -> Result<Self, ParamsError> {
    let params = CrcParams::new(width, polynomial);
    params.validate()?;
    if width % 8 != 0 {
      log::debug!("rejected augmented crc width {width}");
      return Err(ParamsError::AugmentedWidth { width });
    }

    log::trace!("augmented crc engine: width={width} polynomial={:#x}", params.polynomial);

    Ok(Self {
      masks: RegisterMasks::new(width),
      table: Arc::new(CrcTable::new(width, &params.polynomial, false)),
      budget: GrowthBudget::default(),
    })
  }

  /// Mask unbounded registers every `threshold` bytes instead of the default.
  ///
  /// Has no effect on native registers, which never grow.
  #[must_use]
  pub fn with_growth_budget(mut self, threshold: u32) -> Self {
    self.budget = GrowthBudget::new(threshold);
    self
  }

  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.masks.width()
  }

  /// Number of trailing bytes an augmented message reserves.
  #[inline]
  #[must_use]
  pub const fn checksum_len(&self) -> usize {
    (self.masks.width() / 8) as usize
  }

  /// The lookup table (natural convention).
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &Arc<CrcTable<R>> {
    &self.table
  }

  /// Configured growth budget.
  #[inline]
  #[must_use]
  pub const fn growth_budget(&self) -> GrowthBudget {
    self.budget
  }

  /// Divide `data` starting from `initial`, returning the new remainder.
  #[must_use]
  pub fn calculate(&self, data: &[u8], initial: R) -> R {
    let top_shift = self.masks.width() - 8;
    let mut budget = self.budget;
    let mut remainder = initial;

    for &byte in data {
      let index = remainder.shr(top_shift).low_byte();
      remainder = remainder.shl(8).or(&R::from_byte(byte)).xor(self.table.entry(index));
      if R::is_unbounded() && budget.spend() {
        remainder = self.masks.truncate(&remainder);
      }
    }

    self.masks.truncate(&remainder)
  }

  /// [`calculate`](Self::calculate) over `size` bytes of `buffer` starting at
  /// `offset`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] if the range is not within `buffer`.
  pub fn calculate_range(&self, buffer: &[u8], offset: usize, size: usize, initial: R) -> Result<R, RangeError> {
    Ok(self.calculate(RangeError::slice(buffer, offset, size)?, initial))
  }

  /// Compute the checksum of `buffer` and store it big-endian in its last
  /// [`checksum_len`](Self::checksum_len) bytes, which are overwritten.
  ///
  /// Returns the embedded checksum.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] if `buffer` is shorter than the checksum.
  pub fn embed(&self, buffer: &mut [u8], initial: R) -> Result<R, RangeError> {
    let len = buffer.len();
    let data_len = len.checked_sub(self.checksum_len()).ok_or(RangeError::new(0, self.checksum_len(), len))?;

    let (_, tail) = buffer.split_at_mut(data_len);
    tail.fill(0);
    let checksum = self.calculate(buffer, initial);

    let (_, tail) = buffer.split_at_mut(data_len);
    for (slot, shift) in tail.iter_mut().rev().zip((0..).step_by(8)) {
      *slot = checksum.shr(shift).low_byte();
    }
    Ok(checksum)
  }

  /// Check that `buffer` (message plus embedded checksum) divides to zero.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] on a nonzero remainder.
  pub fn verify(&self, buffer: &[u8], initial: R) -> Result<(), VerificationError> {
    if self.calculate(buffer, initial).is_zero() { Ok(()) } else { Err(VerificationError::new()) }
  }

  /// Translate an augmented initial remainder into the initial remainder of
  /// an equivalent non-augmented CRC (no reflection, no final XOR).
  ///
  /// # Examples
  ///
  /// ```
  /// use crcmodel::{AugmentedCrc, BasicCrc, CrcEngine, CrcParams};
  ///
  /// let aug = AugmentedCrc::<u16>::new(16, 0x1021)?;
  /// let mut message = *b"123456789\0\0";
  /// let embedded = aug.embed(&mut message, 0xBEEF)?;
  ///
  /// let params = CrcParams::new(16, 0x1021).with_init(aug.unaugmented_initial(0xBEEF));
  /// assert_eq!(BasicCrc::checksum_of(params, b"123456789")?, embedded);
  /// # Ok::<(), Box<dyn std::error::Error>>(())
  /// ```
  #[must_use]
  pub fn unaugmented_initial(&self, initial: R) -> R {
    let zeros = [0u8; 16];
    let mut remainder = initial;
    let mut pending = self.checksum_len();
    while pending > 0 {
      let step = pending.min(zeros.len());
      remainder = self.calculate(zeros.get(..step).unwrap_or(&[]), remainder);
      pending -= step;
    }
    remainder
  }
}

impl<R: Register> fmt::Debug for AugmentedCrc<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AugmentedCrc").field("table", &self.table).field("budget", &self.budget).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::format;

  use crate::{BasicCrc, CrcEngine, OptimalCrc};

  const POLY: u32 = 0x04C1_1DB7;

  #[test]
  fn embedded_checksum_verifies() {
    let crc = AugmentedCrc::<u32>::new(32, POLY).unwrap();
    let mut buffer = *b"The quick brown fox jumps over the lazy dog\0\0\0\0";
    let checksum = crc.embed(&mut buffer, 0).unwrap();

    assert_eq!(buffer[buffer.len() - 4..], checksum.to_be_bytes());
    assert_eq!(crc.calculate(&buffer, 0), 0);
    assert_eq!(crc.verify(&buffer, 0), Ok(()));
  }

  #[test]
  fn embed_ignores_stale_tail() {
    let crc = AugmentedCrc::<u32>::new(32, POLY).unwrap();
    let mut clean = *b"payload\0\0\0\0";
    let mut stale = *b"payload\xDE\xAD\xBE\xEF";
    assert_eq!(crc.embed(&mut clean, 0).unwrap(), crc.embed(&mut stale, 0).unwrap());
    assert_eq!(clean, stale);
  }

  #[test]
  fn checksum_equals_non_augmented_crc() {
    let crc = AugmentedCrc::<u32>::new(32, POLY).unwrap();
    let mut buffer = *b"123456789\0\0\0\0";
    let checksum = crc.embed(&mut buffer, 0).unwrap();

    let params = CrcParams::<u32>::new(32, POLY);
    assert_eq!(BasicCrc::checksum_of(params.clone(), b"123456789"), Ok(checksum));
    assert_eq!(OptimalCrc::checksum_of(params, b"123456789"), Ok(checksum));
  }

  #[test]
  fn nonzero_initial_remainder() {
    let crc = AugmentedCrc::<u32>::new(32, POLY).unwrap();
    let initial = 0x1234_5678;
    let mut buffer = *b"123456789\0\0\0\0";
    let checksum = crc.embed(&mut buffer, initial).unwrap();
    assert!(crc.verify(&buffer, initial).is_ok());
    assert!(crc.verify(&buffer, 0).is_err());

    let params = CrcParams::<u32>::new(32, POLY).with_init(crc.unaugmented_initial(initial));
    let mut basic = BasicCrc::new(params).unwrap();
    basic.process_bytes(b"123456789");
    assert_eq!(basic.checksum(), checksum);
  }

  #[test]
  fn segments_compose() {
    let crc = AugmentedCrc::<u16>::new(16, 0x1021).unwrap();
    let data = b"segmented augmented message";
    let whole = crc.calculate(data, 0xFFFF);
    for mid in 0..=data.len() {
      let (head, tail) = data.split_at(mid);
      assert_eq!(crc.calculate(tail, crc.calculate(head, 0xFFFF)), whole);
    }
  }

  #[test]
  fn calculate_range_is_checked() {
    let crc = AugmentedCrc::<u8>::new(8, 0x07).unwrap();
    let data = b"0123456789";
    assert_eq!(crc.calculate_range(data, 2, 5, 0), Ok(crc.calculate(b"23456", 0)));
    assert_eq!(crc.calculate_range(data, 10, 0, 0x5A), Ok(0x5A));
    assert_eq!(crc.calculate_range(data, 8, 3, 0), Err(RangeError::new(8, 3, 10)));
    assert!(crc.calculate_range(data, usize::MAX, 2, 0).is_err());
  }

  #[test]
  fn embed_rejects_short_buffer() {
    let crc = AugmentedCrc::<u32>::new(32, POLY).unwrap();
    let mut buffer = [0u8; 3];
    assert_eq!(crc.embed(&mut buffer, 0), Err(RangeError::new(0, 4, 3)));

    // A bare checksum slot is a valid (empty) message.
    let mut buffer = [0xFFu8; 4];
    assert_eq!(crc.embed(&mut buffer, 0), Ok(0));
    assert_eq!(buffer, [0; 4]);
  }

  #[test]
  fn width_must_be_byte_aligned() {
    assert_eq!(AugmentedCrc::<u16>::new(12, 0x80F).unwrap_err(), ParamsError::AugmentedWidth { width: 12 });
    assert_eq!(AugmentedCrc::<u16>::new(0, 0).unwrap_err(), ParamsError::ZeroWidth);
    assert!(AugmentedCrc::<u16>::new(24, 0x1021).is_err());
  }

  #[test]
  fn wide_register_matches_native() {
    let native = AugmentedCrc::<u32>::new(32, POLY).unwrap();
    let wide = AugmentedCrc::<u64>::new(32, u64::from(POLY)).unwrap();
    let data = b"register width does not change the remainder";
    assert_eq!(u64::from(native.calculate(data, 0xCAFE_F00D)), wide.calculate(data, 0xCAFE_F00D));
  }

  #[test]
  fn unaugmented_initial_of_zero_is_zero() {
    let crc = AugmentedCrc::<u64>::new(64, 0x42F0_E1EB_A9EA_3693).unwrap();
    assert_eq!(crc.unaugmented_initial(0), 0);
    assert_eq!(crc.checksum_len(), 8);
  }

  #[cfg(feature = "bigint")]
  #[test]
  fn unbounded_register_with_any_budget() {
    use num_bigint::BigUint;

    let native = AugmentedCrc::<u32>::new(32, POLY).unwrap();
    let data: alloc::vec::Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let expected = BigUint::from(native.calculate(&data, 0xFFFF_FFFF));

    for threshold in [0, 1, 3, 10, 64] {
      let wide = AugmentedCrc::new(32, BigUint::from(POLY)).unwrap().with_growth_budget(threshold);
      assert_eq!(wide.growth_budget().threshold(), threshold.max(1));
      assert_eq!(wide.calculate(&data, BigUint::from(0xFFFF_FFFFu32)), expected);
    }
  }

  #[test]
  fn debug_shows_table() {
    let crc = AugmentedCrc::<u64>::new(32, u64::from(POLY)).unwrap();
    let rendered = format!("{crc:?}");
    assert!(rendered.starts_with("AugmentedCrc {"), "{rendered}");
    assert!(rendered.contains("width: 32"), "{rendered}");
    assert!(rendered.contains("polynomial: 0x4c11db7"), "{rendered}");
  }
}
