//! Error types for checked buffer access.
//!
//! Processing never fails on content; the only runtime failure surface is a
//! caller-supplied `(offset, size)` pair that does not fit the buffer.

/// A requested sub-range lies outside the buffer.
///
/// Returned by the checked `(buffer, offset, size)` entry points instead of
/// panicking on an out-of-bounds index.
///
/// # Examples
///
/// ```
/// use traits::RangeError;
///
/// let err = RangeError::new(6, 4, 8);
/// assert_eq!(err.to_string(), "4 bytes at offset 6 are out of bounds for a buffer of 8 bytes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{size} bytes at offset {offset} are out of bounds for a buffer of {len} bytes")]
pub struct RangeError {
  /// Requested start offset.
  pub offset: usize,
  /// Requested number of bytes.
  pub size: usize,
  /// Actual buffer length.
  pub len: usize,
}

impl RangeError {
  /// Create a new range error.
  #[inline]
  #[must_use]
  pub const fn new(offset: usize, size: usize, len: usize) -> Self {
    Self { offset, size, len }
  }

  /// Resolve `offset..offset + size` against `buffer`.
  ///
  /// Overflowing `offset + size` is reported as out of bounds.
  #[inline]
  pub fn slice(buffer: &[u8], offset: usize, size: usize) -> Result<&[u8], Self> {
    offset
      .checked_add(size)
      .and_then(|end| buffer.get(offset..end))
      .ok_or(Self::new(offset, size, buffer.len()))
  }
}
