//! spinand-gigadevice - GigaDevice SPI-NAND vendor module
//!
//! Recognises GigaDevice GD5F parts from their READ ID bytes and describes
//! each supported model: geometry, ECC requirement, cache op encodings, the
//! ECC status decoder and the OOB layout.
//!
//! GigaDevice has shipped three ID layouts over the years:
//!
//! - early A-series parts answer `[0xFF][MID][DID]`
//! - A- and E-series parts answer `[0x00][MID][DID]`
//! - later (F and newer) parts answer `[MID][DID1][DID2]`

#![cfg_attr(not(feature = "std"), no_std)]

mod chips;
pub mod ecc;
pub mod oob;

pub use chips::CHIPS;
pub use ecc::EccDecoder;
pub use oob::OobLayoutKind;

use spinand_core::chip::{manufacturer, ChipInfo, ChipTable};
use spinand_core::error::Result;
use spinand_core::nand::Manufacturer;

/// GigaDevice manufacturer code
pub const MANUFACTURER_ID: u8 = manufacturer::GIGADEVICE;

/// GigaDevice chip descriptor
pub type GigaDeviceChip = ChipInfo<EccDecoder, OobLayoutKind>;

/// Extract the device code from raw READ ID bytes
///
/// Returns `None` when the bytes do not carry the GigaDevice manufacturer
/// code in either position. Fewer than three bytes never match.
pub fn device_code(id: &[u8]) -> Option<u16> {
    match *id {
        [MANUFACTURER_ID, did1, did2, ..] => Some(u16::from_be_bytes([did1, did2])),
        [0x00 | 0xFF, MANUFACTURER_ID, did, ..] => Some(did as u16),
        _ => None,
    }
}

/// The GigaDevice vendor module
///
/// Wraps the immutable chip table. Build it once and pass it by reference
/// to [`spinand_core::nand::probe`].
#[derive(Debug, Clone, Copy)]
pub struct GigaDevice {
    table: ChipTable<'static, EccDecoder, OobLayoutKind>,
}

impl GigaDevice {
    /// Create the vendor module over the built-in chip table
    pub const fn new() -> Self {
        Self {
            table: ChipTable::new(&CHIPS),
        }
    }
}

impl Default for GigaDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Manufacturer for GigaDevice {
    type Ecc = EccDecoder;
    type Oob = OobLayoutKind;

    fn id(&self) -> u8 {
        MANUFACTURER_ID
    }

    fn name(&self) -> &'static str {
        "GigaDevice"
    }

    fn chips(&self) -> ChipTable<'_, EccDecoder, OobLayoutKind> {
        self.table
    }

    fn detect(&self, id: &[u8]) -> Result<Option<&GigaDeviceChip>> {
        let Some(code) = device_code(id) else {
            return Ok(None);
        };
        log::debug!("GigaDevice: device code {:#06x}", code);

        let chip = self.table.lookup(code).map_err(|e| {
            log::warn!("GigaDevice: unsupported device code {:#06x}", code);
            e
        })?;
        Ok(Some(chip))
    }
}
