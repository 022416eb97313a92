//! ECC status decoding
//!
//! GigaDevice parts report the outcome of on-die ECC in bits 4..6 of the
//! status register (0xC0). Each family packs that field differently:
//!
//! | Family          | Field  | Meaning                                        |
//! |-----------------|--------|------------------------------------------------|
//! | Q4xA            | `0x30` | 0: clean, 1: 1-7 flips, 3: 8 flips, 2: failed  |
//! | Q4UExxG, Q5UExxG| `0x30` | as Q4xA, 1 refined through status register 2   |
//! | Q4UFxxG         | `0x70` | 0: clean, 1: 1-3 flips, 7: failed, n: n+2 flips|

use maybe_async::maybe_async;
use spinand_core::ecc::EccStatusDecoder;
use spinand_core::error::{Error, Result};
use spinand_core::programmer::SpiMaster;
use spinand_core::protocol;
use spinand_core::spi::opcodes::{
    STATUS_ECC_MASK, STATUS_ECC_NO_BITFLIPS, STATUS_ECC_UNCOR_ERROR,
};

/// Second status register, holds the fine ECC bits on E-series parts
pub const REG_STATUS2: u8 = 0xF0;

/// Three-bit ECC field of the F-series
pub const STATUS_ECC_MASK_3BIT: u8 = 0x70;

const ECC_1_TO_7_BITFLIPS: u8 = 0x10;
const ECC_8_BITFLIPS: u8 = 0x30;

const ECC_1_TO_3_BITFLIPS: u8 = 0x10;
const ECC_UNCOR_ERROR_3BIT: u8 = 0x70;

/// ECC status decoder of a chip family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccDecoder {
    /// Coarse two-bit report: 0, 7 or 8 corrected bits
    Q4xA,
    /// Two-bit report refined by status register 2 (also used by Q5UExxG)
    Q4UExxG,
    /// Three-bit report
    Q4UFxxG,
}

impl EccDecoder {
    /// Decode a status byte that needs no extra register read
    ///
    /// Returns `None` for the one case of `Q4UExxG` that has to consult
    /// status register 2.
    fn decode_status(self, status: u8) -> Option<Result<u32>> {
        match self {
            Self::Q4xA => Some(decode_two_bit(status, 7)),
            Self::Q4UExxG if status & STATUS_ECC_MASK == ECC_1_TO_7_BITFLIPS => None,
            Self::Q4UExxG => Some(decode_two_bit(status, 0)),
            Self::Q4UFxxG => Some(decode_three_bit(status)),
        }
    }
}

fn decode_two_bit(status: u8, one_to_seven: u32) -> Result<u32> {
    match status & STATUS_ECC_MASK {
        STATUS_ECC_NO_BITFLIPS => Ok(0),
        ECC_1_TO_7_BITFLIPS => Ok(one_to_seven),
        ECC_8_BITFLIPS => Ok(8),
        STATUS_ECC_UNCOR_ERROR => Err(Error::EccUncorrectable),
        _ => Err(Error::EccInvalidStatus),
    }
}

fn decode_three_bit(status: u8) -> Result<u32> {
    match status & STATUS_ECC_MASK_3BIT {
        STATUS_ECC_NO_BITFLIPS => Ok(0),
        ECC_1_TO_3_BITFLIPS => Ok(3),
        ECC_UNCOR_ERROR_3BIT => Err(Error::EccUncorrectable),
        field => Ok(((field >> 4) + 2) as u32),
    }
}

/// Combine the two status fields of an E-series "1 to 7 flips" report
///
/// The upper two bits of the count come from the status register, the
/// lower two from status register 2, giving 4 to 7.
fn fine_bitflips(status: u8, status2: u8) -> u32 {
    (((status & STATUS_ECC_MASK) >> 2) | ((status2 & STATUS_ECC_MASK) >> 4)) as u32
}

#[maybe_async(AFIT)]
impl EccStatusDecoder for EccDecoder {
    async fn decode<M: SpiMaster + ?Sized>(&self, master: &mut M, status: u8) -> Result<u32> {
        if let Some(result) = self.decode_status(status) {
            return result;
        }

        let status2 = protocol::get_feature(master, REG_STATUS2).await?;
        Ok(fine_bitflips(status, status2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinand_core::spi::opcodes;
    use spinand_dummy::{DummyConfig, DummyNand};

    fn dummy(status2: u8) -> DummyNand {
        DummyNand::new(DummyConfig {
            status2,
            ..DummyConfig::default()
        })
    }

    #[test]
    fn test_q4xa() {
        let mut dev = dummy(0);
        let d = EccDecoder::Q4xA;
        assert_eq!(d.decode(&mut dev, 0x00), Ok(0));
        assert_eq!(d.decode(&mut dev, 0x10), Ok(7));
        assert_eq!(d.decode(&mut dev, 0x30), Ok(8));
        assert_eq!(d.decode(&mut dev, 0x20), Err(Error::EccUncorrectable));
        // Bits outside the field are ignored
        assert_eq!(d.decode(&mut dev, 0x31), Ok(8));
        assert_eq!(d.decode(&mut dev, 0xCF), Ok(0));
        assert!(dev.history().is_empty());
    }

    #[test]
    fn test_shared_status_field_values() {
        let mut dev = dummy(0);
        for d in [EccDecoder::Q4xA, EccDecoder::Q4UExxG] {
            assert_eq!(d.decode(&mut dev, opcodes::STATUS_ECC_NO_BITFLIPS), Ok(0));
            assert_eq!(
                d.decode(&mut dev, opcodes::STATUS_ECC_UNCOR_ERROR),
                Err(Error::EccUncorrectable)
            );
            assert_eq!(d.decode(&mut dev, opcodes::STATUS_ECC_MASK), Ok(8));
        }
        assert_eq!(
            EccDecoder::Q4UFxxG.decode(&mut dev, opcodes::STATUS_ECC_NO_BITFLIPS),
            Ok(0)
        );
        assert!(dev.history().is_empty());
    }

    #[test]
    fn test_q4ue_without_aux_read() {
        let mut dev = dummy(0x30);
        let d = EccDecoder::Q4UExxG;
        assert_eq!(d.decode(&mut dev, 0x00), Ok(0));
        assert_eq!(d.decode(&mut dev, 0x30), Ok(8));
        assert_eq!(d.decode(&mut dev, 0x20), Err(Error::EccUncorrectable));
        assert!(dev.history().is_empty());
    }

    #[test]
    fn test_q4ue_fine_count() {
        let d = EccDecoder::Q4UExxG;
        for (status2, expected) in [(0x00, 4), (0x10, 5), (0x20, 6), (0x30, 7), (0xCF, 4)] {
            let mut dev = dummy(status2);
            assert_eq!(d.decode(&mut dev, 0x10), Ok(expected));

            let history = dev.history();
            assert_eq!(history.len(), 1);
            assert_eq!(history[0].opcode, opcodes::GET_FEATURE);
            assert_eq!(history[0].register, Some(REG_STATUS2));
        }
    }

    #[test]
    fn test_q4ue_aux_read_failure() {
        let mut dev = DummyNand::new(DummyConfig {
            fail_register: Some(REG_STATUS2),
            ..DummyConfig::default()
        });
        assert_eq!(
            EccDecoder::Q4UExxG.decode(&mut dev, 0x10),
            Err(Error::SpiTransferFailed)
        );
        // The other statuses never touch the bus
        assert_eq!(EccDecoder::Q4UExxG.decode(&mut dev, 0x30), Ok(8));
    }

    #[test]
    fn test_q4uf() {
        let mut dev = dummy(0);
        let d = EccDecoder::Q4UFxxG;
        assert_eq!(d.decode(&mut dev, 0x00), Ok(0));
        assert_eq!(d.decode(&mut dev, 0x10), Ok(3));
        assert_eq!(d.decode(&mut dev, 0x20), Ok(4));
        assert_eq!(d.decode(&mut dev, 0x30), Ok(5));
        assert_eq!(d.decode(&mut dev, 0x40), Ok(6));
        assert_eq!(d.decode(&mut dev, 0x50), Ok(7));
        assert_eq!(d.decode(&mut dev, 0x60), Ok(8));
        assert_eq!(d.decode(&mut dev, 0x70), Err(Error::EccUncorrectable));
        assert_eq!(d.decode(&mut dev, 0x8F), Ok(0));
        assert!(dev.history().is_empty());
    }

    #[test]
    fn test_decode_is_repeatable() {
        let mut dev = dummy(0x20);
        for d in [EccDecoder::Q4xA, EccDecoder::Q4UExxG, EccDecoder::Q4UFxxG] {
            for status in 0..=u8::MAX {
                assert_eq!(d.decode(&mut dev, status), d.decode(&mut dev, status));
            }
        }
    }

    #[test]
    fn test_decode_status_defers_only_fine_case() {
        assert!(EccDecoder::Q4UExxG.decode_status(0x10).is_none());
        for status in [0x00, 0x20, 0x30] {
            assert!(EccDecoder::Q4UExxG.decode_status(status).is_some());
        }
        for status in 0..=u8::MAX {
            assert!(EccDecoder::Q4xA.decode_status(status).is_some());
            assert!(EccDecoder::Q4UFxxG.decode_status(status).is_some());
        }
    }
}
