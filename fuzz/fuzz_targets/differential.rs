//! Differential fuzzing: table-driven engine against the bit-serial oracle.
//!
//! Arbitrary parameters (masked to a width in 1..=64) and an arbitrary
//! interleaving of byte runs and sub-byte bit runs must produce identical
//! interim remainders and checksums from both engines.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{BasicCrc, CrcEngine, CrcParams, OptimalCrc, Register};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
  Bytes(Vec<u8>),
  Bits { bits: u8, count: u8 },
  Reset,
}

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u64,
  init: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
  ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
  let width = u32::from(input.width % 64) + 1;
  let mask = u64::low_bits_mask(width);
  let params = CrcParams::new(width, input.polynomial & mask)
    .with_init(input.init & mask)
    .with_xor_out(input.xor_out & mask)
    .with_reflect_in(input.reflect_in)
    .with_reflect_out(input.reflect_out);

  let mut basic = BasicCrc::new(params.clone()).expect("masked parameters validate");
  let mut optimal = OptimalCrc::new(params).expect("masked parameters validate");

  for op in &input.ops {
    match op {
      Op::Bytes(data) => {
        basic.process_bytes(data);
        optimal.process_bytes(data);
      }
      Op::Bits { bits, count } => {
        let count = u32::from(count % 9);
        basic.process_bits(*bits, count);
        optimal.process_bits(*bits, count);
      }
      Op::Reset => {
        basic.reset();
        optimal.reset();
      }
    }
    assert_eq!(
      basic.interim_remainder(),
      optimal.interim_remainder(),
      "interim mismatch: width={width} reflect_in={} reflect_out={}",
      input.reflect_in,
      input.reflect_out
    );
  }

  assert_eq!(basic.checksum(), optimal.checksum(), "checksum mismatch: width={width}");
});
