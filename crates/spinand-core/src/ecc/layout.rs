//! OOB region layouts

use crate::error::Result;

/// A contiguous byte range inside the OOB area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OobRegion {
    /// Offset from the start of the OOB area
    pub offset: u32,
    /// Length in bytes
    pub length: u32,
}

impl OobRegion {
    /// Create a new region
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    /// One past the last byte of the region
    pub const fn end(&self) -> u32 {
        self.offset + self.length
    }

    /// Returns true if the two regions share at least one byte
    pub const fn overlaps(&self, other: &OobRegion) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }

    /// Returns true if `byte` falls inside the region
    pub const fn contains(&self, byte: u32) -> bool {
        byte >= self.offset && byte < self.end()
    }
}

/// Split of the OOB area into ECC parity and free (user) bytes
///
/// Both functions are indexed by section and fail with
/// `OobSectionOutOfRange` past the last section; callers iterate until
/// that error.
pub trait OobLayout {
    /// ECC parity bytes of `section`
    fn ecc(&self, section: usize) -> Result<OobRegion>;

    /// Free bytes of `section`
    fn free(&self, section: usize) -> Result<OobRegion>;

    /// Number of sections, counted by probing until the range error
    fn section_count(&self) -> usize {
        (0..)
            .take_while(|&section| self.ecc(section).is_ok() || self.free(section).is_ok())
            .count()
    }

    /// Total free bytes over all sections
    fn free_bytes(&self) -> u32 {
        sum_regions(|section| self.free(section))
    }

    /// Total ECC bytes over all sections
    fn ecc_bytes(&self) -> u32 {
        sum_regions(|section| self.ecc(section))
    }
}

fn sum_regions<F>(region: F) -> u32
where
    F: Fn(usize) -> Result<OobRegion>,
{
    let mut total = 0;
    let mut section = 0;
    while let Ok(r) = region(section) {
        total += r.length;
        section += 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Halves;

    impl OobLayout for Halves {
        fn ecc(&self, section: usize) -> Result<OobRegion> {
            match section {
                0 | 1 => Ok(OobRegion::new(32 * section as u32 + 16, 16)),
                _ => Err(Error::OobSectionOutOfRange),
            }
        }

        fn free(&self, section: usize) -> Result<OobRegion> {
            match section {
                0 => Ok(OobRegion::new(2, 14)),
                1 => Ok(OobRegion::new(32, 16)),
                _ => Err(Error::OobSectionOutOfRange),
            }
        }
    }

    #[test]
    fn test_region_geometry() {
        let a = OobRegion::new(8, 8);
        assert_eq!(a.end(), 16);
        assert!(a.contains(8));
        assert!(!a.contains(16));
        assert!(a.overlaps(&OobRegion::new(15, 4)));
        assert!(!a.overlaps(&OobRegion::new(16, 4)));
        assert!(!a.overlaps(&OobRegion::new(0, 8)));
    }

    #[test]
    fn test_layout_accounting() {
        assert_eq!(Halves.section_count(), 2);
        assert_eq!(Halves.free_bytes(), 30);
        assert_eq!(Halves.ecc_bytes(), 32);
    }
}
