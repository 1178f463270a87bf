//! CRC algorithm parameters.
//!
//! This module defines the parameters of the Rocksoft CRC model, following
//! the conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use crate::{
  Register,
  error::{ParamField, ParamsError},
};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (the polynomial's degree)
/// - `polynomial`: The generator polynomial without its implicit top bit,
///   always written in natural (unreflected) order
/// - `init`: Initial register value
/// - `xor_out`: Value XORed into the final CRC
/// - `reflect_in`: If true, each input byte is processed LSB-first
/// - `reflect_out`: If true, reflect the final remainder before the XOR
///
/// `init` and `xor_out` default to zero.
///
/// # Examples
///
/// ```
/// use crcmodel::CrcParams;
///
/// let modbus = CrcParams::<u16>::new(16, 0x8005).with_init(0xFFFF).with_reflect(true);
/// assert_eq!(modbus, CrcParams::<u16>::MODBUS);
/// assert!(modbus.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams<R> {
  /// Width in bits.
  pub width: u32,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: R,
  /// Initial value for the CRC register.
  pub init: R,
  /// XOR value applied to final CRC.
  pub xor_out: R,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
}

impl<R: Register> CrcParams<R> {
  /// Parameters with a zero initial remainder, zero final XOR and no
  /// reflection.
  #[must_use]
  pub fn new(width: u32, polynomial: R) -> Self {
    Self { width, polynomial, init: R::zero(), xor_out: R::zero(), reflect_in: false, reflect_out: false }
  }

  /// Set the initial remainder.
  #[must_use]
  pub fn with_init(mut self, init: R) -> Self {
    self.init = init;
    self
  }

  /// Set the final XOR value.
  #[must_use]
  pub fn with_xor_out(mut self, xor_out: R) -> Self {
    self.xor_out = xor_out;
    self
  }

  /// Set input reflection.
  #[must_use]
  pub fn with_reflect_in(mut self, reflect_in: bool) -> Self {
    self.reflect_in = reflect_in;
    self
  }

  /// Set output reflection.
  #[must_use]
  pub fn with_reflect_out(mut self, reflect_out: bool) -> Self {
    self.reflect_out = reflect_out;
    self
  }

  /// Set input and output reflection together.
  #[must_use]
  pub fn with_reflect(self, reflect: bool) -> Self {
    self.with_reflect_in(reflect).with_reflect_out(reflect)
  }

  /// Check the parameters against the register type.
  ///
  /// # Errors
  ///
  /// - [`ParamsError::ZeroWidth`] if `width == 0`
  /// - [`ParamsError::WidthExceedsRegister`] if `R` cannot hold `width` bits
  /// - [`ParamsError::ValueTooWide`] if the polynomial, initial remainder or
  ///   final XOR has a bit set at or above `width`
  pub fn validate(&self) -> Result<(), ParamsError> {
    let result = self.check();
    if let Err(err) = &result {
      log::debug!("rejected crc parameters (width={}): {err}", self.width);
    }
    result
  }

  fn check(&self) -> Result<(), ParamsError> {
    if self.width == 0 {
      return Err(ParamsError::ZeroWidth);
    }
    if let Some(capacity) = R::CAPACITY.filter(|&capacity| self.width > capacity) {
      return Err(ParamsError::WidthExceedsRegister { width: self.width, capacity });
    }

    for (field, value) in
      [(ParamField::Polynomial, &self.polynomial), (ParamField::Init, &self.init), (ParamField::XorOut, &self.xor_out)]
    {
      let bits = value.bit_len();
      if bits > self.width {
        return Err(ParamsError::ValueTooWide { field, width: self.width, bits });
      }
    }
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue presets
// ─────────────────────────────────────────────────────────────────────────────

impl CrcParams<u8> {
  /// CRC-8 (SMBus): check 0xF4.
  pub const CRC8: Self = Self { width: 8, polynomial: 0x07, init: 0x00, xor_out: 0x00, reflect_in: false, reflect_out: false };

  /// CRC-8/MAXIM - 1-Wire, iButton: check 0xA1.
  pub const CRC8_MAXIM: Self =
    Self { width: 8, polynomial: 0x31, init: 0x00, xor_out: 0x00, reflect_in: true, reflect_out: true };
}

impl CrcParams<u16> {
  /// XMODEM (CRC-16/XMODEM): check 0x31C3.
  pub const XMODEM: Self =
    Self { width: 16, polynomial: 0x1021, init: 0x0000, xor_out: 0x0000, reflect_in: false, reflect_out: false };

  /// CRC-16/CCITT-FALSE - Bluetooth, SD cards: check 0x29B1.
  pub const CCITT_FALSE: Self =
    Self { width: 16, polynomial: 0x1021, init: 0xFFFF, xor_out: 0x0000, reflect_in: false, reflect_out: false };

  /// KERMIT: check 0x2189.
  pub const KERMIT: Self =
    Self { width: 16, polynomial: 0x1021, init: 0x0000, xor_out: 0x0000, reflect_in: true, reflect_out: true };

  /// MODBUS: check 0x4B37.
  pub const MODBUS: Self =
    Self { width: 16, polynomial: 0x8005, init: 0xFFFF, xor_out: 0x0000, reflect_in: true, reflect_out: true };
}

impl CrcParams<u32> {
  /// CRC-24/OPENPGP (RFC 4880): check 0x21CF02.
  pub const CRC24_OPENPGP: Self = Self {
    width: 24,
    polynomial: 0x0086_4CFB,
    init: 0x00B7_04CE,
    xor_out: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-32 (ISO-HDLC) - Ethernet, gzip, PNG, zip: check 0xCBF43926.
  pub const CRC32: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-32C (Castagnoli) - iSCSI, SCTP, ext4, Btrfs: check 0xE3069283.
  pub const CRC32C: Self = Self {
    width: 32,
    polynomial: 0x1EDC_6F41,
    init: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-32/BZIP2: check 0xFC891918.
  pub const CRC32_BZIP2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
  };
}

impl CrcParams<u64> {
  /// CRC-64/ECMA-182: check 0x6C40DF5F0B497347.
  pub const CRC64_ECMA_182: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    init: 0,
    xor_out: 0,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-64/WE: check 0x62EC59E3F1A4F00A.
  pub const CRC64_WE: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    init: u64::MAX,
    xor_out: u64::MAX,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-64/XZ - XZ Utils, 7-Zip: check 0x995DC9BBDF1939FA.
  pub const CRC64_XZ: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    init: u64::MAX,
    xor_out: u64::MAX,
    reflect_in: true,
    reflect_out: true,
  };
}
