//! OOB layouts
//!
//! Byte 0 of the OOB area carries the bad block marker on every part and
//! is never handed out as free space.

use spinand_core::ecc::{OobLayout, OobRegion};
use spinand_core::error::{Error, Result};

/// OOB layout of a chip family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OobLayoutKind {
    /// 64-byte OOB split in four 16-byte sections
    ///
    /// Each section holds 8 free bytes followed by 8 ECC bytes.
    Q4xA,
    /// 128-byte OOB, one section: bytes 1..64 free, 64..128 ECC
    Variant2,
    /// 128-byte OOB as [`Variant2`](Self::Variant2), but only bytes 16..20
    /// are free
    Q5Variant2,
}

const Q4XA_SECTIONS: usize = 4;
const Q4XA_SECTION_SIZE: u32 = 16;

fn single_section(section: usize, region: OobRegion) -> Result<OobRegion> {
    if section == 0 {
        Ok(region)
    } else {
        Err(Error::OobSectionOutOfRange)
    }
}

impl OobLayout for OobLayoutKind {
    fn ecc(&self, section: usize) -> Result<OobRegion> {
        match self {
            Self::Q4xA => {
                if section >= Q4XA_SECTIONS {
                    return Err(Error::OobSectionOutOfRange);
                }
                Ok(OobRegion::new(Q4XA_SECTION_SIZE * section as u32 + 8, 8))
            }
            Self::Variant2 | Self::Q5Variant2 => single_section(section, OobRegion::new(64, 64)),
        }
    }

    fn free(&self, section: usize) -> Result<OobRegion> {
        match self {
            Self::Q4xA => {
                if section >= Q4XA_SECTIONS {
                    return Err(Error::OobSectionOutOfRange);
                }
                if section == 0 {
                    // Skip the bad block marker
                    Ok(OobRegion::new(1, 7))
                } else {
                    Ok(OobRegion::new(Q4XA_SECTION_SIZE * section as u32, 8))
                }
            }
            Self::Variant2 => single_section(section, OobRegion::new(1, 63)),
            Self::Q5Variant2 => single_section(section, OobRegion::new(16, 4)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OobLayoutKind; 3] = [
        OobLayoutKind::Q4xA,
        OobLayoutKind::Variant2,
        OobLayoutKind::Q5Variant2,
    ];

    #[test]
    fn test_q4xa_regions() {
        let l = OobLayoutKind::Q4xA;
        assert_eq!(l.ecc(0), Ok(OobRegion::new(8, 8)));
        assert_eq!(l.ecc(3), Ok(OobRegion::new(56, 8)));
        assert_eq!(l.free(0), Ok(OobRegion::new(1, 7)));
        assert_eq!(l.free(1), Ok(OobRegion::new(16, 8)));
        assert_eq!(l.free(2), Ok(OobRegion::new(32, 8)));
        assert_eq!(l.ecc(4), Err(Error::OobSectionOutOfRange));
        assert_eq!(l.free(4), Err(Error::OobSectionOutOfRange));
        assert_eq!(l.section_count(), 4);
    }

    #[test]
    fn test_single_section_regions() {
        let l = OobLayoutKind::Variant2;
        assert_eq!(l.ecc(0), Ok(OobRegion::new(64, 64)));
        assert_eq!(l.free(0), Ok(OobRegion::new(1, 63)));

        let l = OobLayoutKind::Q5Variant2;
        assert_eq!(l.ecc(0), Ok(OobRegion::new(64, 64)));
        assert_eq!(l.free(0), Ok(OobRegion::new(16, 4)));

        for l in [OobLayoutKind::Variant2, OobLayoutKind::Q5Variant2] {
            assert_eq!(l.section_count(), 1);
            assert_eq!(l.ecc(1), Err(Error::OobSectionOutOfRange));
            assert_eq!(l.free(1), Err(Error::OobSectionOutOfRange));
            assert_eq!(l.free(usize::MAX), Err(Error::OobSectionOutOfRange));
        }
    }

    #[test]
    fn test_byte_totals() {
        assert_eq!(OobLayoutKind::Q4xA.free_bytes(), 31);
        assert_eq!(OobLayoutKind::Q4xA.ecc_bytes(), 32);
        assert_eq!(OobLayoutKind::Variant2.free_bytes(), 63);
        assert_eq!(OobLayoutKind::Variant2.ecc_bytes(), 64);
        assert_eq!(OobLayoutKind::Q5Variant2.free_bytes(), 4);
        assert_eq!(OobLayoutKind::Q5Variant2.ecc_bytes(), 64);
    }

    #[test]
    fn test_regions_disjoint_and_marker_reserved() {
        for l in ALL {
            let n = l.section_count();
            let ecc: Vec<_> = (0..n).map(|s| l.ecc(s).unwrap()).collect();
            let free: Vec<_> = (0..n).map(|s| l.free(s).unwrap()).collect();

            for f in &free {
                assert!(!f.contains(0), "{:?}: byte 0 is free", l);
                for e in &ecc {
                    assert!(!f.overlaps(e), "{:?}: {:?} overlaps {:?}", l, f, e);
                }
            }
        }
    }

    #[test]
    fn test_regions_fit_oob() {
        for (l, oob_size) in [
            (OobLayoutKind::Q4xA, 64),
            (OobLayoutKind::Variant2, 128),
            (OobLayoutKind::Q5Variant2, 128),
        ] {
            for s in 0..l.section_count() {
                assert!(l.ecc(s).unwrap().end() <= oob_size);
                assert!(l.free(s).unwrap().end() <= oob_size);
            }
        }
    }
}
