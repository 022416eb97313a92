//! SPI-NAND op templates
//!
//! A chip descriptor lists, for each cache operation, every encoding the
//! chip accepts, fastest first. The framework runs the first one the bus
//! can execute.

use super::{opcodes, AddressWidth, DataDirection, IoMode};
use crate::programmer::SpiFeatures;
use crate::spi::check_io_mode_supported;

/// One encoding of a logical cache operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpiNandOp {
    /// The opcode byte
    pub opcode: u8,
    /// Lines used by each phase
    pub io_mode: IoMode,
    /// Column address width
    pub address_width: AddressWidth,
    /// Dummy bytes between address and data, clocked on the address lines
    pub dummy_bytes: u8,
    /// Data phase direction
    pub direction: DataDirection,
}

impl SpiNandOp {
    const fn read(opcode: u8, io_mode: IoMode, address_width: AddressWidth, ndummy: u8) -> Self {
        Self {
            opcode,
            io_mode,
            address_width,
            dummy_bytes: ndummy,
            direction: DataDirection::In,
        }
    }

    const fn load(opcode: u8, io_mode: IoMode) -> Self {
        Self {
            opcode,
            io_mode,
            address_width: AddressWidth::TwoByte,
            dummy_bytes: 0,
            direction: DataDirection::Out,
        }
    }

    /// Read from cache, single I/O with a 2-byte column
    pub const fn page_read_from_cache(fast: bool, ndummy: u8) -> Self {
        let opcode = if fast {
            opcodes::READ_FROM_CACHE_FAST
        } else {
            opcodes::READ_FROM_CACHE
        };
        Self::read(opcode, IoMode::Single, AddressWidth::TwoByte, ndummy)
    }

    /// Read from cache, single I/O with a 3-byte column
    pub const fn page_read_from_cache_3a(fast: bool, ndummy: u8) -> Self {
        let opcode = if fast {
            opcodes::READ_FROM_CACHE_FAST
        } else {
            opcodes::READ_FROM_CACHE
        };
        Self::read(opcode, IoMode::Single, AddressWidth::ThreeByte, ndummy)
    }

    /// Read from cache x2 (1-1-2)
    pub const fn page_read_from_cache_x2(ndummy: u8) -> Self {
        Self::read(opcodes::READ_FROM_CACHE_X2, IoMode::DualData, AddressWidth::TwoByte, ndummy)
    }

    /// Read from cache x2 (1-1-2) with a 3-byte column
    pub const fn page_read_from_cache_x2_3a(ndummy: u8) -> Self {
        Self::read(opcodes::READ_FROM_CACHE_X2, IoMode::DualData, AddressWidth::ThreeByte, ndummy)
    }

    /// Read from cache x4 (1-1-4)
    pub const fn page_read_from_cache_x4(ndummy: u8) -> Self {
        Self::read(opcodes::READ_FROM_CACHE_X4, IoMode::QuadData, AddressWidth::TwoByte, ndummy)
    }

    /// Read from cache x4 (1-1-4) with a 3-byte column
    pub const fn page_read_from_cache_x4_3a(ndummy: u8) -> Self {
        Self::read(opcodes::READ_FROM_CACHE_X4, IoMode::QuadData, AddressWidth::ThreeByte, ndummy)
    }

    /// Read from cache dual I/O (1-2-2)
    pub const fn page_read_from_cache_dualio(ndummy: u8) -> Self {
        Self::read(opcodes::READ_FROM_CACHE_DUALIO, IoMode::DualIo, AddressWidth::TwoByte, ndummy)
    }

    /// Read from cache quad I/O (1-4-4)
    pub const fn page_read_from_cache_quadio(ndummy: u8) -> Self {
        Self::read(opcodes::READ_FROM_CACHE_QUADIO, IoMode::QuadIo, AddressWidth::TwoByte, ndummy)
    }

    /// Program load, single I/O
    ///
    /// `reset` selects the variant that fills the cache with 0xFF first.
    pub const fn prog_load(reset: bool) -> Self {
        let opcode = if reset {
            opcodes::PROG_LOAD
        } else {
            opcodes::PROG_LOAD_RANDOM
        };
        Self::load(opcode, IoMode::Single)
    }

    /// Program load x4 (1-1-4)
    pub const fn prog_load_x4(reset: bool) -> Self {
        let opcode = if reset {
            opcodes::PROG_LOAD_X4
        } else {
            opcodes::PROG_LOAD_RANDOM_X4
        };
        Self::load(opcode, IoMode::QuadData)
    }

    /// Dummy clock cycles needed for `dummy_bytes` on the address lines
    pub const fn dummy_cycles(&self) -> u8 {
        self.dummy_bytes * 8 / self.io_mode.addr_lines()
    }

    /// Returns true if the bus described by `features` can run this op
    pub fn is_supported_by(&self, features: SpiFeatures) -> bool {
        check_io_mode_supported(self.io_mode, self.direction, features).is_ok()
    }
}

/// Pick the first variant in `variants` the bus can execute
///
/// Lists are ordered fastest first, so the result is the fastest usable
/// encoding. `None` means the list is exhausted.
pub fn select_op_variant(variants: &[SpiNandOp], features: SpiFeatures) -> Option<&SpiNandOp> {
    variants.iter().find(|op| op.is_supported_by(features))
}

#[cfg(test)]
mod tests {
    use super::*;

    const READS: &[SpiNandOp] = &[
        SpiNandOp::page_read_from_cache_quadio(1),
        SpiNandOp::page_read_from_cache_x4(1),
        SpiNandOp::page_read_from_cache_dualio(1),
        SpiNandOp::page_read_from_cache_x2(1),
        SpiNandOp::page_read_from_cache(true, 1),
        SpiNandOp::page_read_from_cache(false, 1),
    ];

    #[test]
    fn test_dummy_cycles() {
        assert_eq!(SpiNandOp::page_read_from_cache(true, 1).dummy_cycles(), 8);
        assert_eq!(SpiNandOp::page_read_from_cache_dualio(1).dummy_cycles(), 4);
        assert_eq!(SpiNandOp::page_read_from_cache_quadio(1).dummy_cycles(), 2);
        assert_eq!(SpiNandOp::page_read_from_cache_3a(false, 0).dummy_cycles(), 0);
    }

    #[test]
    fn test_select_fastest_supported() {
        let op = select_op_variant(READS, SpiFeatures::DUAL | SpiFeatures::QUAD).unwrap();
        assert_eq!(op.opcode, opcodes::READ_FROM_CACHE_QUADIO);

        let op = select_op_variant(READS, SpiFeatures::QUAD_IN | SpiFeatures::DUAL).unwrap();
        assert_eq!(op.opcode, opcodes::READ_FROM_CACHE_X4);

        let op = select_op_variant(READS, SpiFeatures::DUAL_IN).unwrap();
        assert_eq!(op.opcode, opcodes::READ_FROM_CACHE_X2);

        let op = select_op_variant(READS, SpiFeatures::empty()).unwrap();
        assert_eq!(op.opcode, opcodes::READ_FROM_CACHE_FAST);
    }

    #[test]
    fn test_select_exhausted() {
        let quad_only = [SpiNandOp::prog_load_x4(true)];
        assert!(select_op_variant(&quad_only, SpiFeatures::QUAD_IN).is_none());
        assert!(select_op_variant(&quad_only, SpiFeatures::QUAD_OUT).is_some());
        assert!(select_op_variant(&[], SpiFeatures::all()).is_none());
    }

    #[test]
    fn test_prog_load_variants() {
        assert_eq!(SpiNandOp::prog_load(true).opcode, 0x02);
        assert_eq!(SpiNandOp::prog_load(false).opcode, 0x84);
        assert_eq!(SpiNandOp::prog_load_x4(true).opcode, 0x32);
        assert_eq!(SpiNandOp::prog_load_x4(false).opcode, 0x34);
        assert_eq!(SpiNandOp::prog_load_x4(false).direction, DataDirection::Out);
    }
}
