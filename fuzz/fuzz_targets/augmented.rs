//! Fuzz target for augmented messages.
//!
//! An embedded checksum must verify, must match the non-augmented CRC of the
//! payload, and the remainder must compose over arbitrary segment splits.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{AugmentedCrc, BasicCrc, CrcParams};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width_bytes: u8,
  polynomial: u64,
  initial: u64,
  data: Vec<u8>,
  /// Segment lengths for the split computation.
  chunk_sizes: Vec<u16>,
}

fuzz_target!(|input: Input| {
  let width = (u32::from(input.width_bytes % 8) + 1) * 8;
  let shift = 64 - width;
  let polynomial = input.polynomial << shift >> shift;
  let initial = input.initial << shift >> shift;

  let aug = AugmentedCrc::new(width, polynomial).expect("byte-aligned width validates");

  let mut buffer = input.data.clone();
  buffer.resize(buffer.len() + aug.checksum_len(), 0);
  let checksum = aug.embed(&mut buffer, initial).expect("buffer holds the checksum");
  assert!(aug.verify(&buffer, initial).is_ok(), "embedded checksum does not verify");

  let params = CrcParams::new(width, polynomial).with_init(aug.unaugmented_initial(initial));
  let expected = BasicCrc::checksum_of(params, &input.data).expect("parameters validate");
  assert_eq!(checksum, expected, "augmented and non-augmented checksums differ");

  let mut remainder = initial;
  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < buffer.len() {
    let chunk_size = match input.chunk_sizes.get(chunk_idx % input.chunk_sizes.len().max(1)) {
      Some(&size) => usize::from(size).max(1),
      None => 1,
    };
    let size = chunk_size.min(buffer.len() - offset);
    remainder = aug.calculate_range(&buffer, offset, size, remainder).expect("range within buffer");
    offset += size;
    chunk_idx += 1;
  }
  assert_eq!(remainder, 0, "segmented remainder is nonzero");
});
