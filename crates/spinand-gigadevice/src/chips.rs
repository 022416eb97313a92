//! GigaDevice chip table

use spinand_core::chip::{EccRequirement, Features, MemOrg, OpVariantSets};
use spinand_core::spi::SpiNandOp;

use crate::ecc::EccDecoder;
use crate::oob::OobLayoutKind;
use crate::GigaDeviceChip;

// ============================================================================
// Cache op variants, fastest first
// ============================================================================

const READ_CACHE_VARIANTS: [SpiNandOp; 6] = [
    SpiNandOp::page_read_from_cache_quadio(1),
    SpiNandOp::page_read_from_cache_x4(1),
    SpiNandOp::page_read_from_cache_dualio(1),
    SpiNandOp::page_read_from_cache_x2(1),
    SpiNandOp::page_read_from_cache(true, 1),
    SpiNandOp::page_read_from_cache(false, 1),
];

// F-series parts take a 3-byte column address on the non-IO reads
const READ_CACHE_VARIANTS_F: [SpiNandOp; 6] = [
    SpiNandOp::page_read_from_cache_quadio(1),
    SpiNandOp::page_read_from_cache_x4_3a(1),
    SpiNandOp::page_read_from_cache_dualio(1),
    SpiNandOp::page_read_from_cache_x2_3a(1),
    SpiNandOp::page_read_from_cache_3a(true, 1),
    SpiNandOp::page_read_from_cache_3a(false, 0),
];

const WRITE_CACHE_VARIANTS: [SpiNandOp; 2] =
    [SpiNandOp::prog_load_x4(true), SpiNandOp::prog_load(true)];

const UPDATE_CACHE_VARIANTS: [SpiNandOp; 2] =
    [SpiNandOp::prog_load_x4(false), SpiNandOp::prog_load(false)];

const OPS: OpVariantSets = OpVariantSets::new(
    &READ_CACHE_VARIANTS,
    &WRITE_CACHE_VARIANTS,
    &UPDATE_CACHE_VARIANTS,
);

const OPS_F: OpVariantSets = OpVariantSets::new(
    &READ_CACHE_VARIANTS_F,
    &WRITE_CACHE_VARIANTS,
    &UPDATE_CACHE_VARIANTS,
);

/// Single-LUN, single-plane SLC geometry with 2 KiB pages and 64-page blocks
const fn memorg(oob_size: u32, eraseblocks: u32, max_bad: u32) -> MemOrg {
    MemOrg::new(1, 2048, oob_size, 64, eraseblocks, max_bad, 1, 1, 1)
}

// ============================================================================
// Chip table
// ============================================================================

/// All supported GigaDevice parts
///
/// Device codes are unique. Codes below 0x100 come from the legacy ID
/// layout, wider codes from the `[MID][DID1][DID2]` layout.
pub static CHIPS: [GigaDeviceChip; 6] = [
    GigaDeviceChip {
        name: "GD5F1GQ4xA",
        device_code: 0xF1,
        memorg: memorg(64, 1024, 20),
        ecc_requirement: EccRequirement::new(8, 512),
        op_variants: OPS,
        features: Features::HAS_QE_BIT,
        ecc_decoder: EccDecoder::Q4xA,
        oob_layout: OobLayoutKind::Q4xA,
    },
    GigaDeviceChip {
        name: "GD5F2GQ4xA",
        device_code: 0xF2,
        memorg: memorg(64, 2048, 40),
        ecc_requirement: EccRequirement::new(8, 512),
        op_variants: OPS,
        features: Features::HAS_QE_BIT,
        ecc_decoder: EccDecoder::Q4xA,
        oob_layout: OobLayoutKind::Q4xA,
    },
    GigaDeviceChip {
        name: "GD5F4GQ4xA",
        device_code: 0xF4,
        memorg: memorg(64, 4096, 80),
        ecc_requirement: EccRequirement::new(8, 512),
        op_variants: OPS,
        features: Features::HAS_QE_BIT,
        ecc_decoder: EccDecoder::Q4xA,
        oob_layout: OobLayoutKind::Q4xA,
    },
    GigaDeviceChip {
        name: "GD5F1GQ4UExxG",
        device_code: 0xD1,
        memorg: memorg(128, 1024, 20),
        ecc_requirement: EccRequirement::new(8, 512),
        op_variants: OPS,
        features: Features::HAS_QE_BIT,
        ecc_decoder: EccDecoder::Q4UExxG,
        oob_layout: OobLayoutKind::Variant2,
    },
    GigaDeviceChip {
        name: "GD5F1GQ4UFxxG",
        device_code: 0xB148,
        memorg: memorg(128, 1024, 20),
        ecc_requirement: EccRequirement::new(8, 512),
        op_variants: OPS_F,
        features: Features::HAS_QE_BIT,
        ecc_decoder: EccDecoder::Q4UFxxG,
        oob_layout: OobLayoutKind::Variant2,
    },
    GigaDeviceChip {
        name: "GD5F1GQ5UExxG",
        device_code: 0x51,
        memorg: memorg(128, 1024, 20),
        ecc_requirement: EccRequirement::new(4, 512),
        op_variants: OPS,
        features: Features::HAS_QE_BIT,
        // Q5 reports ECC the same way as Q4UE
        ecc_decoder: EccDecoder::Q4UExxG,
        oob_layout: OobLayoutKind::Q5Variant2,
    },
];
