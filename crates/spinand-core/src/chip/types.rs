//! SPI-NAND chip type definitions

use super::features::Features;
use crate::spi::SpiNandOp;

/// Memory organization of a NAND device
///
/// Describes how pages, eraseblocks, planes and LUNs are laid out. All
/// values are fixed by the part and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemOrg {
    /// Bits stored per cell (1 for SLC)
    pub bits_per_cell: u8,
    /// Main area bytes per page
    pub page_size: u32,
    /// Out-of-band bytes per page
    pub oob_size: u32,
    /// Pages in one eraseblock
    pub pages_per_eraseblock: u32,
    /// Eraseblocks in one LUN
    pub eraseblocks_per_lun: u32,
    /// Bad eraseblocks the vendor allows per LUN
    pub max_bad_eraseblocks_per_lun: u32,
    /// Planes in one LUN
    pub planes_per_lun: u32,
    /// LUNs (dies) per target
    pub luns_per_target: u32,
    /// Targets (chip selects)
    pub ntargets: u32,
}

impl MemOrg {
    /// Create a new memory organization
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        bits_per_cell: u8,
        page_size: u32,
        oob_size: u32,
        pages_per_eraseblock: u32,
        eraseblocks_per_lun: u32,
        max_bad_eraseblocks_per_lun: u32,
        planes_per_lun: u32,
        luns_per_target: u32,
        ntargets: u32,
    ) -> Self {
        Self {
            bits_per_cell,
            page_size,
            oob_size,
            pages_per_eraseblock,
            eraseblocks_per_lun,
            max_bad_eraseblocks_per_lun,
            planes_per_lun,
            luns_per_target,
            ntargets,
        }
    }

    /// Main area bytes in one eraseblock
    pub const fn eraseblock_size(&self) -> u32 {
        self.page_size * self.pages_per_eraseblock
    }

    /// Eraseblocks in one target
    pub const fn eraseblocks_per_target(&self) -> u32 {
        self.eraseblocks_per_lun * self.luns_per_target
    }

    /// Eraseblocks across all targets
    pub const fn total_eraseblocks(&self) -> u32 {
        self.eraseblocks_per_target() * self.ntargets
    }

    /// Pages across all targets
    pub const fn total_pages(&self) -> u64 {
        self.total_eraseblocks() as u64 * self.pages_per_eraseblock as u64
    }

    /// Main area size of the whole device in bytes
    pub const fn total_size(&self) -> u64 {
        self.total_pages() * self.page_size as u64
    }

    /// Row address bits selecting a page within an eraseblock
    pub const fn page_address_bits(&self) -> u32 {
        ceil_log2(self.pages_per_eraseblock)
    }

    /// Row address bits selecting an eraseblock within a LUN
    pub const fn eraseblock_address_bits(&self) -> u32 {
        ceil_log2(self.eraseblocks_per_lun)
    }

    /// Address bits selecting a plane within a LUN
    pub const fn plane_address_bits(&self) -> u32 {
        ceil_log2(self.planes_per_lun)
    }

    /// Address bits selecting a LUN within a target
    pub const fn lun_address_bits(&self) -> u32 {
        ceil_log2(self.luns_per_target)
    }
}

const fn ceil_log2(n: u32) -> u32 {
    if n <= 1 {
        0
    } else {
        32 - (n - 1).leading_zeros()
    }
}

/// ECC strength the flash vendor requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EccRequirement {
    /// Bits that must be correctable per step
    pub strength: u32,
    /// Codeword (step) size in bytes
    pub step_size: u32,
}

impl EccRequirement {
    /// Create a new ECC requirement
    pub const fn new(strength: u32, step_size: u32) -> Self {
        Self {
            strength,
            step_size,
        }
    }
}

/// Op variant lists for the three cache operations, fastest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpVariantSets {
    /// Read from cache
    pub read_cache: &'static [SpiNandOp],
    /// Program load that resets the cache first
    pub write_cache: &'static [SpiNandOp],
    /// Program load that keeps the current cache contents
    pub update_cache: &'static [SpiNandOp],
}

impl OpVariantSets {
    /// Bundle three variant lists
    pub const fn new(
        read_cache: &'static [SpiNandOp],
        write_cache: &'static [SpiNandOp],
        update_cache: &'static [SpiNandOp],
    ) -> Self {
        Self {
            read_cache,
            write_cache,
            update_cache,
        }
    }
}

/// SPI-NAND chip descriptor
///
/// This structure contains everything needed to identify and drive a
/// specific SPI-NAND model. `E` is the vendor's ECC status decoder and `L`
/// its OOB layout; both are normally small enums so that every descriptor
/// picks exactly one strategy of each.
#[derive(Debug, Clone, Copy)]
pub struct ChipInfo<E, L> {
    /// Chip model name (e.g., "GD5F1GQ4UExxG")
    pub name: &'static str,
    /// Device code, unique within the vendor table
    pub device_code: u16,
    /// Memory organization
    pub memorg: MemOrg,
    /// Required ECC strength
    pub ecc_requirement: EccRequirement,
    /// Supported cache op encodings
    pub op_variants: OpVariantSets,
    /// Feature flags
    pub features: Features,
    /// ECC status decoder
    pub ecc_decoder: E,
    /// OOB layout
    pub oob_layout: L,
}

impl<E, L> ChipInfo<E, L> {
    /// Check if this chip matches the given device code
    pub fn matches_device_code(&self, device_code: u16) -> bool {
        self.device_code == device_code
    }

    /// Check if the chip has a Quad Enable bit to manage
    pub fn has_qe_bit(&self) -> bool {
        self.features.contains(Features::HAS_QE_BIT)
    }
}

/// SPI-NAND manufacturer IDs (first byte of READ ID)
pub mod manufacturer {
    /// GigaDevice
    pub const GIGADEVICE: u8 = 0xC8;
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORG_1G: MemOrg = MemOrg::new(1, 2048, 128, 64, 1024, 20, 1, 1, 1);

    #[test]
    fn test_memorg_sizes() {
        assert_eq!(ORG_1G.eraseblock_size(), 128 * 1024);
        assert_eq!(ORG_1G.total_eraseblocks(), 1024);
        assert_eq!(ORG_1G.total_pages(), 65536);
        assert_eq!(ORG_1G.total_size(), 128 * 1024 * 1024);
    }

    #[test]
    fn test_memorg_address_bits() {
        assert_eq!(ORG_1G.page_address_bits(), 6);
        assert_eq!(ORG_1G.eraseblock_address_bits(), 10);
        assert_eq!(ORG_1G.plane_address_bits(), 0);
        assert_eq!(ORG_1G.lun_address_bits(), 0);

        let org = MemOrg::new(1, 4096, 256, 64, 2048, 40, 2, 2, 1);
        assert_eq!(org.eraseblock_address_bits(), 11);
        assert_eq!(org.plane_address_bits(), 1);
        assert_eq!(org.lun_address_bits(), 1);
        assert_eq!(org.total_eraseblocks(), 4096);
    }

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4096), 12);
    }
}
