//! Error types.
//!
//! Every fault is a configuration fault detected at construction; once an
//! engine exists, processing arbitrary bytes cannot fail.

use core::fmt;

/// Which parameter value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
  /// The truncated generator polynomial.
  Polynomial,
  /// The initial remainder.
  Init,
  /// The final XOR value.
  XorOut,
}

impl fmt::Display for ParamField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Polynomial => "polynomial",
      Self::Init => "initial remainder",
      Self::XorOut => "final xor value",
    })
  }
}

/// Invalid CRC parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ParamsError {
  /// `width` was zero.
  #[error("crc width must be at least 1 bit")]
  ZeroWidth,

  /// `width` does not fit the chosen register type.
  #[error("crc width {width} exceeds the {capacity}-bit register")]
  WidthExceedsRegister {
    /// Requested width.
    width: u32,
    /// Register capacity in bits.
    capacity: u32,
  },

  /// A value has significant bits at or above `width`.
  #[error("{field} needs {bits} significant bits but the crc width is {width}")]
  ValueTooWide {
    /// The offending parameter.
    field: ParamField,
    /// Configured width.
    width: u32,
    /// Significant bits in the value.
    bits: u32,
  },

  /// Augmented engines only support byte-aligned widths.
  #[error("augmented crc width must be a positive multiple of 8, got {width}")]
  AugmentedWidth {
    /// Requested width.
    width: u32,
  },

  /// A shared lookup table was built for different parameters.
  #[error("lookup table was built for width {table_width} (reflect={table_reflect}), engine needs width {width} (reflect={reflect})")]
  TableMismatch {
    /// Width of the supplied table.
    table_width: u32,
    /// Convention of the supplied table.
    table_reflect: bool,
    /// Width the engine needs.
    width: u32,
    /// Convention the engine needs.
    reflect: bool,
  },
}

/// An augmented message did not divide to a zero remainder.
///
/// The embedded checksum is missing, stale, or the message was corrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("augmented message does not verify: nonzero remainder")]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}
