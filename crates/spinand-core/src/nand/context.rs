//! SPI-NAND context - runtime state for a matched chip

use crate::chip::{ChipInfo, MemOrg};
use crate::ecc::EccStatusDecoder;
use crate::error::{Error, Result};
use crate::programmer::{SpiFeatures, SpiMaster};
use crate::spi::{select_op_variant, SpiNandOp};
use maybe_async::maybe_async;

/// Runtime context for a matched SPI-NAND chip
///
/// Holds the chip descriptor together with the cache op encodings chosen
/// for the bus it sits on.
#[derive(Debug)]
pub struct SpiNandContext<'a, E, L> {
    /// The identified chip
    pub chip: &'a ChipInfo<E, L>,
    /// Selected read from cache encoding
    pub read_cache: &'static SpiNandOp,
    /// Selected program load encoding
    pub write_cache: &'static SpiNandOp,
    /// Selected program load random data encoding
    pub update_cache: &'static SpiNandOp,
}

impl<'a, E, L> SpiNandContext<'a, E, L> {
    /// Create a context, picking the fastest usable encoding of each cache op
    ///
    /// Fails with `ChipNotSupported` if any of the three lists has no entry
    /// the bus can run.
    pub fn new(chip: &'a ChipInfo<E, L>, features: SpiFeatures) -> Result<Self> {
        let select = |variants: &'static [SpiNandOp], what: &str| {
            select_op_variant(variants, features).ok_or_else(|| {
                log::warn!(
                    "{}: no {} op variant usable with bus features {:?}",
                    chip.name,
                    what,
                    features
                );
                Error::ChipNotSupported
            })
        };

        let sets = &chip.op_variants;
        Ok(Self {
            chip,
            read_cache: select(sets.read_cache, "read cache")?,
            write_cache: select(sets.write_cache, "write cache")?,
            update_cache: select(sets.update_cache, "update cache")?,
        })
    }

    /// Get the memory organization of the chip
    pub fn memorg(&self) -> &'a MemOrg {
        &self.chip.memorg
    }

    /// Get the OOB layout of the chip
    pub fn oob_layout(&self) -> &'a L {
        &self.chip.oob_layout
    }

    /// Check if the selected ops need the Quad Enable bit set
    pub fn needs_quad_enable(&self) -> bool {
        self.chip.has_qe_bit()
            && [self.read_cache, self.write_cache, self.update_cache]
                .iter()
                .any(|op| op.io_mode.requires_quad())
    }
}

#[maybe_async]
impl<'a, E: EccStatusDecoder, L> SpiNandContext<'a, E, L> {
    /// Decode the status byte of a completed page read
    ///
    /// Returns the corrected bit-flip count. Uncorrectable pages are logged
    /// and reported as `EccUncorrectable`; nothing is retried here.
    pub async fn ecc_status<M: SpiMaster + ?Sized>(&self, master: &mut M, status: u8) -> Result<u32> {
        let result = self.chip.ecc_decoder.decode(master, status).await;
        match result {
            Ok(bitflips) => log::trace!("{}: {} corrected bitflips", self.chip.name, bitflips),
            Err(Error::EccUncorrectable) => {
                log::warn!("{}: uncorrectable ECC error (status {:#04x})", self.chip.name, status)
            }
            Err(e) => log::debug!("{}: ECC status decode failed: {}", self.chip.name, e),
        }
        result
    }
}
