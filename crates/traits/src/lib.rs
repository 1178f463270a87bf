//! Core traits for crcmodel.
//!
//! This crate provides the streaming interface shared by every stateful CRC
//! engine. It is `no_std` compatible and depends only on `thiserror`.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CrcEngine`] | Bit/byte-at-a-time CRC computation with pure read accessors |
//! | [`RangeError`] | Checked `(buffer, offset, size)` access |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod engine;
pub mod error;

pub use engine::CrcEngine;
pub use error::RangeError;
