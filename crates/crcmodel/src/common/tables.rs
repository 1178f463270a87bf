//! Byte-indexed CRC lookup table generation.
//!
//! Each of the 256 entries is the partial remainder contributed by one byte
//! value, obtained by simulating eight bit-serial division steps from a zero
//! register. The table-driven engine then replaces those eight steps with a
//! single lookup.
//!
//! # Stray high bits
//!
//! In the natural (non-reflected) convention the simulated register is shifted
//! left without masking, so an entry may carry bits above position
//! `width - 1` whenever the register is wider than the CRC. Engines never
//! observe them (the index extraction and the final mask both drop them), but
//! [`CrcTable::masked`] must be used if the table leaves the process.

// SAFETY: All array indexing in this module uses a `u8` index into a
// 256-entry array, so bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use super::{
  mask::{BYTE_HIGH_BIT, RegisterMasks},
  reflect::{Convention, reflect_byte},
};
use crate::Register;

/// Number of entries: one per byte value.
pub const TABLE_SIZE: usize = 256;

/// Immutable 256-entry lookup table for one `(width, polynomial, reflect)`.
///
/// Tables are plain data keyed by their parameters; share one between engines
/// through an `Arc` rather than rebuilding it.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable<R> {
  width: u32,
  polynomial: R,
  reflect: bool,
  entries: [R; TABLE_SIZE],
}

impl<R: Register> CrcTable<R> {
  /// Build the table for `width` and the truncated `polynomial`.
  ///
  /// With `reflect` set, entry `reflect8(d)` holds `reflect_width(r(d))`;
  /// otherwise entry `d` holds `r(d)`, where `r(d)` is the remainder after
  /// dividing the byte `d` MSB-first.
  ///
  /// Polynomial bits at or above `width` are ignored.
  #[must_use]
  pub fn new(width: u32, polynomial: &R, reflect: bool) -> Self {
    let masks = RegisterMasks::<R>::new(width);
    let polynomial = masks.truncate(polynomial);
    let convention = Convention::new(width, reflect);

    let entries = core::array::from_fn(|index| {
      let index = index as u8;
      // Reflection is an involution, so the dividend stored at `index` is its
      // own reflection.
      let dividend = if reflect { reflect_byte(index) } else { index };
      convention.apply(&divide_byte(dividend, &polynomial, masks.high_bit()))
    });

    log::debug!("built crc table: width={width} polynomial={polynomial:#x} reflect={reflect}");

    Self { width, polynomial, reflect, entries }
  }

  /// Entry for a table index.
  #[inline]
  #[must_use]
  pub fn entry(&self, index: u8) -> &R {
    &self.entries[usize::from(index)]
  }

  /// All entries, possibly carrying bits above `width` (see module docs).
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[R; TABLE_SIZE] {
    &self.entries
  }

  /// All entries masked to `width` bits, suitable for serialization.
  #[must_use]
  pub fn masked(&self) -> [R; TABLE_SIZE] {
    let masks = RegisterMasks::<R>::new(self.width);
    core::array::from_fn(|index| masks.truncate(&self.entries[index]))
  }

  /// CRC width the table was built for.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Truncated polynomial the table was built for (masked to `width`).
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> &R {
    &self.polynomial
  }

  /// Whether the table is in the reflected convention.
  #[inline]
  #[must_use]
  pub const fn is_reflected(&self) -> bool {
    self.reflect
  }

  /// `true` if this table was built for exactly these parameters.
  #[must_use]
  pub fn matches(&self, width: u32, polynomial: &R, reflect: bool) -> bool {
    self.width == width
      && self.reflect == reflect
      && self.polynomial == RegisterMasks::<R>::new(width).truncate(polynomial)
  }
}

impl<R: Register> fmt::Debug for CrcTable<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable")
      .field("width", &self.width)
      .field("polynomial", &format_args!("{:#x}", self.polynomial))
      .field("reflect", &self.reflect)
      .finish_non_exhaustive()
  }
}

/// Remainder of one byte pushed MSB-first through a zero register.
fn divide_byte<R: Register>(dividend: u8, polynomial: &R, high_bit: &R) -> R {
  let mut remainder = R::zero();
  let mut mask = BYTE_HIGH_BIT;
  while mask != 0 {
    if dividend & mask != 0 {
      remainder = remainder.xor(high_bit);
    }
    remainder = if remainder.test(high_bit) { remainder.shl(1).xor(polynomial) } else { remainder.shl(1) };
    mask >>= 1;
  }
  remainder
}
