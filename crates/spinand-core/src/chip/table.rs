//! Immutable chip table
//!
//! A vendor builds its table once (normally over a `static` slice) and
//! hands it to the probe flow by reference. There is no insertion or
//! removal after construction.

use super::types::ChipInfo;
use crate::error::{Error, Result};

/// Ordered, read-only collection of chip descriptors for one vendor
#[derive(Debug, Clone, Copy)]
pub struct ChipTable<'a, E, L> {
    chips: &'a [ChipInfo<E, L>],
}

impl<'a, E, L> ChipTable<'a, E, L> {
    /// Wrap a slice of chip descriptors
    pub const fn new(chips: &'a [ChipInfo<E, L>]) -> Self {
        Self { chips }
    }

    /// Get all chips in the table
    pub fn chips(&self) -> &'a [ChipInfo<E, L>] {
        self.chips
    }

    /// Get the number of chips in the table
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Iterate over all chips
    pub fn iter(&self) -> impl Iterator<Item = &'a ChipInfo<E, L>> {
        self.chips.iter()
    }

    /// Find a chip by its exact device code
    ///
    /// Returns `ChipNotFound` when no entry carries `device_code`.
    pub fn lookup(&self, device_code: u16) -> Result<&'a ChipInfo<E, L>> {
        self.chips
            .iter()
            .find(|c| c.matches_device_code(device_code))
            .ok_or(Error::ChipNotFound)
    }

    /// Find a chip by model name (ASCII case-insensitive, exact)
    pub fn find_by_name(&self, name: &str) -> Option<&'a ChipInfo<E, L>> {
        self.chips.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Check that no two entries share a device code
    pub fn has_unique_device_codes(&self) -> bool {
        self.chips.iter().enumerate().all(|(i, a)| {
            self.chips[i + 1..]
                .iter()
                .all(|b| b.device_code != a.device_code)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::{EccRequirement, Features, MemOrg, OpVariantSets};
    use crate::spi::SpiNandOp;

    const READS: &[SpiNandOp] = &[SpiNandOp::page_read_from_cache(false, 1)];
    const LOADS: &[SpiNandOp] = &[SpiNandOp::prog_load(true)];

    const fn chip(name: &'static str, device_code: u16) -> ChipInfo<(), ()> {
        ChipInfo {
            name,
            device_code,
            memorg: MemOrg::new(1, 2048, 64, 64, 1024, 20, 1, 1, 1),
            ecc_requirement: EccRequirement::new(8, 512),
            op_variants: OpVariantSets::new(READS, LOADS, LOADS),
            features: Features::empty(),
            ecc_decoder: (),
            oob_layout: (),
        }
    }

    static CHIPS: [ChipInfo<(), ()>; 3] = [chip("A", 0x00F1), chip("B", 0xB148), chip("C", 0x51)];

    #[test]
    fn test_lookup_exact() {
        let table = ChipTable::new(&CHIPS);
        for c in &CHIPS {
            assert_eq!(table.lookup(c.device_code).unwrap().name, c.name);
        }
        assert_eq!(table.lookup(0xF100).unwrap_err(), Error::ChipNotFound);
        assert_eq!(table.lookup(0x0000).unwrap_err(), Error::ChipNotFound);
        assert_eq!(table.lookup(0xB1).unwrap_err(), Error::ChipNotFound);
    }

    #[test]
    fn test_find_by_name() {
        let table = ChipTable::new(&CHIPS);
        assert_eq!(table.find_by_name("b").unwrap().device_code, 0xB148);
        assert!(table.find_by_name("D").is_none());
    }

    #[test]
    fn test_unique_device_codes() {
        assert!(ChipTable::new(&CHIPS).has_unique_device_codes());

        let dup = [chip("A", 0x51), chip("B", 0x51)];
        assert!(!ChipTable::new(&dup).has_unique_device_codes());
        assert_eq!(ChipTable::new(&dup).len(), 2);
    }
}
