//! Deferred masking for unbounded registers.
//!
//! A native register drops every bit shifted past its capacity, so its
//! remainder never grows. An arbitrary-precision register keeps them: each
//! byte shifted in adds up to 8 bits above `width`. Those bits never reach a
//! table index (index extraction keeps only the 8 bits just below `width`),
//! so masking can be postponed, but the value must not grow without bound.
//!
//! [`GrowthBudget`] counts bytes since the last mask and asks for a new one
//! every `threshold` bytes.

/// Default number of bytes between masks.
pub const DEFAULT_GROWTH_BUDGET: u32 = 10;

/// Counter of bytes processed since the register was last masked.
///
/// # Examples
///
/// ```
/// use crcmodel::GrowthBudget;
///
/// let mut budget = GrowthBudget::new(3);
/// assert!(!budget.spend());
/// assert!(!budget.spend());
/// assert!(budget.spend()); // mask now; the budget refills
/// assert!(!budget.spend());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthBudget {
  threshold: u32,
  remaining: u32,
}

impl GrowthBudget {
  /// Mask every `threshold` bytes. A threshold of zero is treated as one
  /// (mask after every byte).
  #[inline]
  #[must_use]
  pub const fn new(threshold: u32) -> Self {
    let threshold = if threshold == 0 { 1 } else { threshold };
    Self { threshold, remaining: threshold }
  }

  /// Configured number of bytes between masks.
  #[inline]
  #[must_use]
  pub const fn threshold(&self) -> u32 {
    self.threshold
  }

  /// Bytes left before the next mask is due.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> u32 {
    self.remaining
  }

  /// Charge one byte of growth.
  ///
  /// Returns `true` when the caller must mask its register now; the budget is
  /// then reset to the threshold.
  #[inline]
  pub fn spend(&mut self) -> bool {
    self.remaining = self.remaining.saturating_sub(1);
    if self.remaining == 0 {
      self.refill();
      true
    } else {
      false
    }
  }

  /// Reset to the full threshold (after an external mask).
  #[inline]
  pub fn refill(&mut self) {
    self.remaining = self.threshold;
  }
}

impl Default for GrowthBudget {
  #[inline]
  fn default() -> Self {
    Self::new(DEFAULT_GROWTH_BUDGET)
  }
}
