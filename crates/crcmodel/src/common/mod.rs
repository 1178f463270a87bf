//! Building blocks shared by every engine.
//!
//! This module provides:
//! - Register masks derived from the CRC width
//! - Bit reflection and the per-convention index/shift helpers
//! - Byte-indexed lookup table construction
//! - The deferred-mask growth budget for unbounded registers

pub mod budget;
pub mod mask;
pub mod reflect;
pub mod tables;

#[cfg(test)]
mod proptests;
