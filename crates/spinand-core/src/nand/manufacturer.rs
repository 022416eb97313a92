//! Manufacturer (vendor module) trait

use crate::chip::{ChipInfo, ChipTable};
use crate::ecc::{EccStatusDecoder, OobLayout};
use crate::error::Result;

/// A SPI-NAND vendor module
///
/// Implementors own an immutable chip table and know how to recognise
/// their own parts from raw READ ID bytes.
pub trait Manufacturer {
    /// ECC status decoder type referenced by the chip table
    type Ecc: EccStatusDecoder + 'static;
    /// OOB layout type referenced by the chip table
    type Oob: OobLayout + 'static;

    /// Manufacturer code reported by READ ID
    fn id(&self) -> u8;

    /// Human readable vendor name
    fn name(&self) -> &'static str;

    /// The vendor's chip table
    fn chips(&self) -> ChipTable<'_, Self::Ecc, Self::Oob>;

    /// Match raw READ ID bytes against this vendor
    ///
    /// - `Ok(None)`: the ID does not belong to this vendor, try the next one
    /// - `Ok(Some(chip))`: the ID matched a chip of the table
    /// - `Err(_)`: the ID belongs to this vendor but cannot be used (for
    ///   example `ChipNotFound` for an unknown device code)
    fn detect(&self, id: &[u8]) -> Result<Option<&ChipInfo<Self::Ecc, Self::Oob>>>;

    /// [`detect`](Self::detect) folded into the C dispatch convention:
    /// 1 for a match, 0 for another vendor, a negative errno on error
    fn detect_status(&self, id: &[u8]) -> i32 {
        match self.detect(id) {
            Ok(Some(_)) => 1,
            Ok(None) => 0,
            Err(e) => e.errno(),
        }
    }
}
