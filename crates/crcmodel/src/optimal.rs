//! Table-driven (byte-at-a-time) engine.
//!
//! One lookup replaces the eight division steps [`BasicCrc`](crate::BasicCrc)
//! performs per byte:
//!
//! ```text
//! index     = leading_byte(remainder) ^ byte
//! remainder = shift_out_leading_byte(remainder) ^ table[index]
//! ```
//!
//! For reflected-input CRCs the register is kept in reversed bit order for its
//! whole life, so the "leading" byte is the low byte and bytes shift out to
//! the right; the initial value is reflected once on entry and the interim
//! remainder is reflected back on read. The checksum only needs a second
//! reflection when `reflect_in != reflect_out`.
//!
//! For identical parameters and input this engine produces the same checksum
//! as the bit-serial engine; the property tests in this crate check exactly
//! that.

use alloc::sync::Arc;
use core::fmt;

use traits::CrcEngine;

use crate::{CrcParams, CrcTable, GrowthBudget, ParamsError, Register, RegisterMasks, common::reflect::Convention};

/// Byte-at-a-time CRC engine backed by a shared lookup table.
///
/// # Examples
///
/// ```
/// use crcmodel::{CrcEngine, CrcParams, OptimalCrc};
///
/// let mut crc = OptimalCrc::new(CrcParams::<u32>::CRC32)?;
/// crc.process_bytes(b"1234");
/// crc.process_bytes(b"56789");
/// assert_eq!(crc.checksum(), 0xCBF4_3926);
/// # Ok::<(), crcmodel::ParamsError>(())
/// ```
///
/// Engines with identical parameters can share one table:
///
/// ```
/// use crcmodel::{CrcEngine, CrcParams, OptimalCrc};
///
/// let first = OptimalCrc::new(CrcParams::<u32>::CRC32C)?;
/// let mut second = OptimalCrc::with_table(CrcParams::<u32>::CRC32C, first.table().clone())?;
/// second.process_bytes(b"123456789");
/// assert_eq!(second.checksum(), 0xE306_9283);
/// # Ok::<(), crcmodel::ParamsError>(())
/// ```
#[derive(Clone)]
pub struct OptimalCrc<R> {
  params: CrcParams<R>,
  masks: RegisterMasks<R>,
  /// Convention of the running register (reflected iff `reflect_in`).
  input: Convention,
  /// Extra reflection applied on output (iff `reflect_in != reflect_out`).
  output: Convention,
  /// Polynomial in the register's convention, for single-bit steps.
  bit_polynomial: R,
  /// Single bit that leaves the register first in its convention.
  leading_bit: R,
  table: Arc<CrcTable<R>>,
  remainder: R,
  budget: Option<GrowthBudget>,
}

impl<R: Register> OptimalCrc<R> {
  /// Create an engine, building its lookup table.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError`] if the parameters do not validate.
  pub fn new(params: CrcParams<R>) -> Result<Self, ParamsError> {
    params.validate()?;
    let table = Arc::new(CrcTable::new(params.width, &params.polynomial, params.reflect_in));
    Ok(Self::assemble(params, table))
  }

  /// Create an engine that reuses an existing table.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError`] if the parameters do not validate, or
  /// [`ParamsError::TableMismatch`] if `table` was built for a different
  /// width, polynomial, or input reflection.
  pub fn with_table(params: CrcParams<R>, table: Arc<CrcTable<R>>) -> Result<Self, ParamsError> {
    params.validate()?;
    if !table.matches(params.width, &params.polynomial, params.reflect_in) {
      log::debug!("rejected shared crc table {table:?} for width={}", params.width);
      return Err(ParamsError::TableMismatch {
        table_width: table.width(),
        table_reflect: table.is_reflected(),
        width: params.width,
        reflect: params.reflect_in,
      });
    }
    Ok(Self::assemble(params, table))
  }

  fn assemble(params: CrcParams<R>, table: Arc<CrcTable<R>>) -> Self {
    let masks = RegisterMasks::<R>::new(params.width);
    let input = Convention::new(params.width, params.reflect_in);
    let output = Convention::new(params.width, params.reflect_in != params.reflect_out);
    let bit_polynomial = input.apply(&params.polynomial);
    let leading_bit = if input.is_reflected() { R::one() } else { masks.high_bit().clone() };
    // Only the natural convention shifts left, and only unbounded registers
    // keep what is shifted past `width`.
    let budget = (R::is_unbounded() && !input.is_reflected()).then(GrowthBudget::default);

    log::trace!(
      "optimal crc engine: width={} polynomial={:#x} reflect_in={} reflect_out={}",
      params.width,
      params.polynomial,
      params.reflect_in,
      params.reflect_out
    );

    Self { remainder: input.apply(&params.init), params, masks, input, output, bit_polynomial, leading_bit, table, budget }
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

  /// The shared lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &Arc<CrcTable<R>> {
    &self.table
  }

  /// Charge the growth budget for one step and mask if it is due.
  #[inline]
  fn settle(&mut self) {
    if self.budget.as_mut().is_some_and(GrowthBudget::spend) {
      self.remainder = self.masks.truncate(&self.remainder);
    }
  }
}

impl<R: Register> fmt::Debug for OptimalCrc<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OptimalCrc")
      .field("params", &self.params)
      .field("table", &self.table)
      .field("remainder", &format_args!("{:#x}", self.remainder))
      .field("budget", &self.budget)
      .finish_non_exhaustive()
  }
}

impl<R: Register> CrcEngine for OptimalCrc<R> {
  type Value = R;

  fn process_bit(&mut self, bit: bool) {
    if bit {
      self.remainder = self.remainder.xor(&self.leading_bit);
    }
    let divide = self.remainder.test(&self.leading_bit);
    self.remainder = if self.input.is_reflected() { self.remainder.shr(1) } else { self.remainder.shl(1) };
    if divide {
      self.remainder = self.remainder.xor(&self.bit_polynomial);
    }
    self.settle();
  }

  #[inline]
  fn process_byte(&mut self, byte: u8) {
    let index = self.input.index(&self.remainder, byte);
    self.remainder = self.input.shift(&self.remainder).xor(self.table.entry(index));
    self.settle();
  }

  #[inline]
  fn reset(&mut self) {
    self.remainder = self.input.apply(&self.params.init);
  }

  #[inline]
  fn reset_to(&mut self, remainder: R) {
    self.remainder = self.input.apply(&remainder);
  }

  #[inline]
  fn interim_remainder(&self) -> R {
    self.masks.truncate(&self.input.apply(&self.remainder))
  }

  fn checksum(&self) -> R {
    self.masks.truncate(&self.output.apply(&self.remainder).xor(&self.params.xor_out))
  }
}
