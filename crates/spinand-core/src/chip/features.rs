//! SPI-NAND chip feature flags

use bitflags::bitflags;

bitflags! {
    /// Feature flags for SPI-NAND chips
    ///
    /// These flags tell the framework which configuration steps a chip
    /// needs before multi-line or vendor specific operations work.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u32 {
        /// Quad Enable bit in the configuration register gates 4-line transfers
        const HAS_QE_BIT       = 1 << 0;
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::empty()
    }
}
