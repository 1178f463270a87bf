//! Shared helpers for integration tests.

#![allow(dead_code)]

/// xorshift64* step; deterministic test data only.
#[inline]
fn xorshift64star(state: &mut u64) -> u64 {
  let mut x = *state;
  x ^= x >> 12;
  x ^= x << 25;
  x ^= x >> 27;
  *state = x;
  x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = (seed ^ (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)) | 1;
  (0..len).map(|_| (xorshift64star(&mut state) >> 56) as u8).collect()
}

/// Install `env_logger` once so `RUST_LOG=crcmodel=trace` shows engine logs.
pub fn init_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}
