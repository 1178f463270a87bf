//! Parameterized CRC engines following the Rocksoft model.
//!
//! Any CRC described by `(width, polynomial, init, xor_out, reflect_in,
//! reflect_out)` can be computed by three interchangeable algorithms that
//! agree bit for bit:
//!
//! | Type | Algorithm | Use |
//! |------|-----------|-----|
//! | [`BasicCrc`] | bit-serial long division | conformance oracle |
//! | [`OptimalCrc`] | byte-indexed lookup table | production path |
//! | [`AugmentedCrc`] | table-driven, checksum embedded in the message | self-verifying buffers |
//!
//! Engines are generic over a [`Register`]: `u8` through `u128`, or
//! `num_bigint::BigUint` (feature `bigint`) for widths no native integer can
//! hold.
//!
//! # Example
//!
//! ```rust
//! use crcmodel::{BasicCrc, CrcEngine, CrcParams, OptimalCrc};
//!
//! // One-shot computation
//! let crc = OptimalCrc::checksum_of(CrcParams::<u32>::CRC32, b"123456789")?;
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation, including sub-byte input
//! let mut fast = OptimalCrc::new(CrcParams::<u16>::XMODEM)?;
//! let mut slow = BasicCrc::new(CrcParams::<u16>::XMODEM)?;
//! fast.process_bytes(b"1234");
//! fast.process_bits(0b101, 3);
//! slow.process_bytes(b"1234");
//! slow.process_bits(0b101, 3);
//! assert_eq!(fast.checksum(), slow.checksum());
//! # Ok::<(), crcmodel::ParamsError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for shared tables).
//! Disable the default features for embedded use:
//!
//! ```toml
//! [dependencies]
//! crcmodel = { version = "0.1", default-features = false }
//! ```
//!
//! # Logging
//!
//! Table construction, engine construction and rejected parameters are
//! reported through the [`log`](https://docs.rs/log) facade. No logger is
//! installed by this crate.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod augmented;
mod basic;
mod common;
mod error;
mod optimal;
mod params;
mod register;

pub use augmented::AugmentedCrc;
pub use basic::BasicCrc;
pub use common::{
  budget::{DEFAULT_GROWTH_BUDGET, GrowthBudget},
  mask::RegisterMasks,
  reflect::{reflect, reflect_byte},
  tables::{CrcTable, TABLE_SIZE},
};
pub use error::{ParamField, ParamsError, VerificationError};
pub use optimal::OptimalCrc;
pub use params::CrcParams;
pub use register::Register;
pub use traits::{CrcEngine, RangeError};
