//! Property tests for the engines and their building blocks.
//!
//! The central invariant: for any valid parameters and any input, the
//! table-driven engine produces exactly what the bit-serial engine produces,
//! both for the final checksum and for the interim remainder. Parameters are
//! drawn over every width a register can hold, all four reflection
//! combinations and arbitrary (masked) init / xor values.
//!
//! The bit-serial engine is the oracle; it is a direct transcription of the
//! division the model defines.

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;
use traits::CrcEngine;

use super::{mask::RegisterMasks, reflect::reflect_portable};
use crate::{BasicCrc, CrcParams, OptimalCrc, Register, reflect};

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..=512)
}

/// Bit runs of 0..=8 bits each, as `(bits, count)`.
fn arb_bit_runs() -> impl Strategy<Value = Vec<(u8, u32)>> {
  prop::collection::vec((any::<u8>(), 0..=8u32), 0..=64)
}

/// Random valid parameters for register `R`, width in `1..=max_width`.
fn arb_params<R, S>(max_width: u32, value: S) -> impl Strategy<Value = CrcParams<R>>
where
  R: Register,
  S: Strategy<Value = R> + Clone,
{
  (1..=max_width, value.clone(), value.clone(), value, any::<bool>(), any::<bool>()).prop_map(
    |(width, polynomial, init, xor_out, reflect_in, reflect_out)| {
      let masks = RegisterMasks::<R>::new(width);
      CrcParams::new(width, masks.truncate(&polynomial))
        .with_init(masks.truncate(&init))
        .with_xor_out(masks.truncate(&xor_out))
        .with_reflect_in(reflect_in)
        .with_reflect_out(reflect_out)
    },
  )
}

// ─────────────────────────────────────────────────────────────────────────────
// Oracles
// ─────────────────────────────────────────────────────────────────────────────

fn engines_agree<R: Register>(params: CrcParams<R>, data: &[u8]) -> Result<(), TestCaseError> {
  let mut basic = BasicCrc::new(params.clone()).map_err(|e| TestCaseError::fail(std::format!("{e}")))?;
  let mut optimal = OptimalCrc::new(params).map_err(|e| TestCaseError::fail(std::format!("{e}")))?;

  basic.process_bytes(data);
  optimal.process_bytes(data);

  prop_assert_eq!(basic.interim_remainder(), optimal.interim_remainder());
  prop_assert_eq!(basic.checksum(), optimal.checksum());
  Ok(())
}

fn bit_streams_agree<R: Register>(params: CrcParams<R>, runs: &[(u8, u32)]) -> Result<(), TestCaseError> {
  let mut basic = BasicCrc::new(params.clone()).map_err(|e| TestCaseError::fail(std::format!("{e}")))?;
  let mut optimal = OptimalCrc::new(params).map_err(|e| TestCaseError::fail(std::format!("{e}")))?;

  for &(bits, count) in runs {
    basic.process_bits(bits, count);
    optimal.process_bits(bits, count);
    // Whole bytes go through the table on the optimal side.
    basic.process_byte(bits);
    optimal.process_byte(bits);
  }

  prop_assert_eq!(basic.interim_remainder(), optimal.interim_remainder());
  prop_assert_eq!(basic.checksum(), optimal.checksum());
  Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine Equivalence
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn engines_agree_u8(params in arb_params(8, any::<u8>()), data in arb_data()) {
    engines_agree(params, &data)?;
  }

  #[test]
  fn engines_agree_u16(params in arb_params(16, any::<u16>()), data in arb_data()) {
    engines_agree(params, &data)?;
  }

  #[test]
  fn engines_agree_u32(params in arb_params(32, any::<u32>()), data in arb_data()) {
    engines_agree(params, &data)?;
  }

  #[test]
  fn engines_agree_u64(params in arb_params(64, any::<u64>()), data in arb_data()) {
    engines_agree(params, &data)?;
  }

  #[test]
  fn engines_agree_u128(params in arb_params(128, any::<u128>()), data in arb_data()) {
    engines_agree(params, &data)?;
  }

  /// Narrow CRCs held in a wide register exercise the stray-high-bit paths.
  #[test]
  fn engines_agree_narrow_width_in_u64(params in arb_params(12, any::<u64>()), data in arb_data()) {
    engines_agree(params, &data)?;
  }

  #[test]
  fn register_type_does_not_change_result(params in arb_params(32, any::<u32>()), data in arb_data()) {
    let wide = CrcParams::new(params.width, u64::from(params.polynomial))
      .with_init(u64::from(params.init))
      .with_xor_out(u64::from(params.xor_out))
      .with_reflect_in(params.reflect_in)
      .with_reflect_out(params.reflect_out);

    let narrow = OptimalCrc::checksum_of(params, &data).map(u64::from);
    prop_assert_eq!(narrow, OptimalCrc::checksum_of(wide, &data));
  }

  #[test]
  fn mixed_bit_and_byte_streams_agree(params in arb_params(64, any::<u64>()), runs in arb_bit_runs()) {
    bit_streams_agree(params, &runs)?;
  }

  #[test]
  fn chunking_equivalence(params in arb_params(32, any::<u32>()), data in arb_data(), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let mut chunked = OptimalCrc::new(params.clone()).unwrap();
    chunked.process_bytes(a);
    let interim = chunked.interim_remainder();

    // Resuming from an interim remainder in a fresh engine is the same stream.
    let mut resumed = OptimalCrc::new(params.clone()).unwrap();
    resumed.reset_to(interim);
    resumed.process_bytes(b);

    chunked.process_vectored(&[b]);
    let oneshot = OptimalCrc::checksum_of(params, &data).unwrap();
    prop_assert_eq!(chunked.checksum(), oneshot);
    prop_assert_eq!(resumed.checksum(), oneshot);
  }
}

#[cfg(feature = "bigint")]
mod unbounded {
  use num_bigint::BigUint;
  use proptest::prelude::*;

  use super::*;

  fn arb_biguint() -> impl Strategy<Value = BigUint> + Clone {
    prop::collection::vec(any::<u8>(), 0..=24).prop_map(|bytes| BigUint::from_bytes_le(&bytes))
  }

  proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn engines_agree_biguint(params in arb_params(192, arb_biguint()), data in prop::collection::vec(any::<u8>(), 0..=128)) {
      engines_agree(params, &data)?;
    }

    #[test]
    fn biguint_matches_u128(params in arb_params(128, any::<u128>()), data in prop::collection::vec(any::<u8>(), 0..=128)) {
      let wide = CrcParams::new(params.width, BigUint::from(params.polynomial))
        .with_init(BigUint::from(params.init))
        .with_xor_out(BigUint::from(params.xor_out))
        .with_reflect_in(params.reflect_in)
        .with_reflect_out(params.reflect_out);

      let native = OptimalCrc::checksum_of(params, &data).unwrap();
      prop_assert_eq!(OptimalCrc::checksum_of(wide, &data).unwrap(), BigUint::from(native));
    }

    #[test]
    fn biguint_reflection_involution(value in arb_biguint(), bits in 1..=192u32) {
      let value = RegisterMasks::<BigUint>::new(bits).truncate(&value);
      prop_assert_eq!(reflect(&reflect(&value, bits), bits), value);
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reflection and Masks
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn reflection_involution(value in any::<u128>(), bits in 1..=128u32) {
    let value = value & u128::low_bits_mask(bits);
    prop_assert_eq!(reflect(&reflect(&value, bits), bits), value);
  }

  #[test]
  fn native_reflection_matches_portable(value in any::<u64>(), bits in 0..=64u32) {
    prop_assert_eq!(reflect(&value, bits), reflect_portable(&value, bits));
  }

  #[test]
  fn mask_shape(width in 1..=128u32) {
    let masks = RegisterMasks::<u128>::new(width);
    prop_assert_eq!(masks.significant().count_ones(), width);
    prop_assert_eq!(masks.high_bit().count_ones(), 1);
    prop_assert_eq!(masks.high_bit().trailing_zeros(), width - 1);
  }
}
