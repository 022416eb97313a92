//! spinand-dummy - Register-level SPI-NAND emulator for testing
//!
//! This crate provides a dummy SPI master with a SPI-NAND device behind it.
//! It answers READ ID and the feature registers, emulates the busy period
//! after a reset and records every transaction, so probe and ECC decoding
//! can be tested without real hardware.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use spinand_core::error::{Error, Result};
use spinand_core::programmer::SpiFeatures;
#[cfg(feature = "alloc")]
use spinand_core::programmer::{default_execute_with_vec, SpiMaster};
#[cfg(feature = "alloc")]
use spinand_core::spi::{check_io_mode_supported, opcodes, DataDirection, SpiCommand};

/// Configuration for the dummy device
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Bytes clocked out after READ ID
    pub id: [u8; 4],
    /// Bus capabilities reported by the master
    pub features: SpiFeatures,
    /// Initial status register (0xC0)
    pub status: u8,
    /// Initial status register 2 (0xF0)
    pub status2: u8,
    /// Initial configuration register (0xB0)
    pub cfg: u8,
    /// Status reads that report busy after each reset
    pub busy_polls_after_reset: u32,
    /// Feature register whose access fails with `SpiTransferFailed`
    pub fail_register: Option<u8>,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            id: [0x00, 0xC8, 0xD1, 0x00], // GigaDevice GD5F1GQ4UExxG
            features: SpiFeatures::empty(),
            status: 0,
            status2: 0,
            cfg: 0,
            busy_polls_after_reset: 0,
            fail_register: None,
        }
    }
}

/// One recorded bus transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    /// Opcode sent
    pub opcode: u8,
    /// Feature register addressed by GET/SET FEATURE
    pub register: Option<u8>,
}

/// Dummy SPI-NAND device
#[cfg(feature = "alloc")]
#[derive(Debug)]
pub struct DummyNand {
    config: DummyConfig,
    block_lock: u8,
    cfg: u8,
    status: u8,
    status2: u8,
    busy_polls: u32,
    delayed_us: u64,
    history: Vec<Transaction>,
}

#[cfg(feature = "alloc")]
impl DummyNand {
    /// Create a new dummy device with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        Self {
            block_lock: 0x38, // all blocks locked after power-up
            cfg: config.cfg,
            status: config.status,
            status2: config.status2,
            busy_polls: 0,
            delayed_us: 0,
            history: Vec::new(),
            config,
        }
    }

    /// Create a new dummy device with default configuration (GD5F1GQ4UExxG)
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Current contents of a feature register, 0 for unknown registers
    pub fn register(&self, reg: u8) -> u8 {
        match reg {
            opcodes::REG_BLOCK_LOCK => self.block_lock,
            opcodes::REG_CFG => self.cfg,
            opcodes::REG_STATUS => self.status,
            REG_STATUS2 => self.status2,
            _ => 0,
        }
    }

    /// Every transaction executed so far, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Total time spent in `delay_us`
    pub fn delayed_us(&self) -> u64 {
        self.delayed_us
    }

    fn check_register(&self, reg: u8) -> Result<()> {
        if self.config.fail_register == Some(reg) {
            log::debug!("dummy: injected failure on register {:#04x}", reg);
            return Err(Error::SpiTransferFailed);
        }
        Ok(())
    }

    fn get_feature(&mut self, reg: u8) -> Result<u8> {
        self.check_register(reg)?;
        let mut value = self.register(reg);
        if reg == opcodes::REG_STATUS && self.busy_polls > 0 {
            self.busy_polls -= 1;
            value |= opcodes::STATUS_BUSY;
        }
        Ok(value)
    }

    fn set_feature(&mut self, reg: u8, value: u8) -> Result<()> {
        self.check_register(reg)?;
        match reg {
            opcodes::REG_BLOCK_LOCK => self.block_lock = value,
            opcodes::REG_CFG => self.cfg = value,
            // Status registers are read-only
            opcodes::REG_STATUS | REG_STATUS2 => {}
            _ => return Err(Error::OpcodeNotSupported),
        }
        Ok(())
    }

    /// Full-duplex transfer on the emulated wire
    fn transfer(&mut self, tx: &[u8], read_len: usize) -> Result<Vec<u8>> {
        let (&opcode, rest) = tx.split_first().ok_or(Error::SpiTransferFailed)?;
        let register = match opcode {
            opcodes::GET_FEATURE | opcodes::SET_FEATURE => rest.first().copied(),
            _ => None,
        };
        self.history.push(Transaction { opcode, register });
        log::trace!("dummy: {:02X?} ({} bytes in)", tx, read_len);

        let mut rx = vec![0u8; read_len];
        match (opcode, rest) {
            (opcodes::READ_ID, _) => {
                let n = read_len.min(self.config.id.len());
                rx[..n].copy_from_slice(&self.config.id[..n]);
            }
            (opcodes::GET_FEATURE, [reg]) => {
                let value = self.get_feature(*reg)?;
                rx.fill(value);
            }
            (opcodes::SET_FEATURE, [reg, value]) => self.set_feature(*reg, *value)?,
            (opcodes::RESET, []) => {
                self.busy_polls = self.config.busy_polls_after_reset;
            }
            (opcodes::GET_FEATURE | opcodes::SET_FEATURE | opcodes::RESET, _) => {
                return Err(Error::SpiTransferFailed)
            }
            _ => return Err(Error::OpcodeNotSupported),
        }
        Ok(rx)
    }
}

/// Second status register on GigaDevice parts
///
/// Mirrors `spinand_gigadevice::ecc::REG_STATUS2`; the emulator models that
/// vendor's register map and sits below the vendor crate in the graph.
#[cfg(feature = "alloc")]
const REG_STATUS2: u8 = 0xF0;

#[cfg(feature = "alloc")]
impl SpiMaster for DummyNand {
    fn features(&self) -> SpiFeatures {
        self.config.features
    }

    fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<()> {
        let direction = if cmd.has_read() {
            DataDirection::In
        } else if cmd.has_write() {
            DataDirection::Out
        } else {
            DataDirection::None
        };
        check_io_mode_supported(cmd.io_mode, direction, self.config.features)?;

        default_execute_with_vec(cmd, |tx, read_len| self.transfer(tx, read_len))
    }

    fn delay_us(&mut self, us: u32) {
        self.delayed_us += us as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinand_core::protocol;
    use spinand_core::spi::IoMode;

    #[test]
    fn test_read_id() {
        let mut dev = DummyNand::new(DummyConfig {
            id: [0xC8, 0xB1, 0x48, 0x00],
            ..DummyConfig::default()
        });
        assert_eq!(protocol::read_id(&mut dev).unwrap(), [0xC8, 0xB1, 0x48, 0x00]);
        assert_eq!(
            dev.history(),
            &[Transaction {
                opcode: opcodes::READ_ID,
                register: None
            }]
        );
    }

    #[test]
    fn test_feature_registers() {
        let mut dev = DummyNand::new(DummyConfig {
            status: 0x20,
            status2: 0x10,
            ..DummyConfig::default()
        });
        assert_eq!(protocol::read_status(&mut dev).unwrap(), 0x20);
        assert_eq!(protocol::get_feature(&mut dev, REG_STATUS2).unwrap(), 0x10);

        protocol::set_feature(&mut dev, opcodes::REG_BLOCK_LOCK, 0).unwrap();
        assert_eq!(dev.register(opcodes::REG_BLOCK_LOCK), 0);

        // Read-only
        protocol::set_feature(&mut dev, opcodes::REG_STATUS, 0xFF).unwrap();
        assert_eq!(dev.register(opcodes::REG_STATUS), 0x20);
    }

    #[test]
    fn test_update_cfg_skips_redundant_write() {
        let mut dev = DummyNand::new(DummyConfig {
            cfg: opcodes::CFG_ECC_ENABLE,
            ..DummyConfig::default()
        });

        protocol::update_cfg(&mut dev, opcodes::CFG_QUAD_ENABLE, 0).unwrap();
        assert_eq!(dev.history().len(), 1);

        protocol::update_cfg(&mut dev, opcodes::CFG_QUAD_ENABLE, 0xFF).unwrap();
        assert_eq!(dev.history().len(), 3);
        assert_eq!(
            dev.register(opcodes::REG_CFG),
            opcodes::CFG_ECC_ENABLE | opcodes::CFG_QUAD_ENABLE
        );
    }

    #[test]
    fn test_reset_busy_period() {
        let mut dev = DummyNand::new(DummyConfig {
            busy_polls_after_reset: 2,
            ..DummyConfig::default()
        });
        protocol::reset(&mut dev).unwrap();
        assert_eq!(protocol::wait_ready(&mut dev, 10, 1000).unwrap(), 0);
        assert_eq!(dev.delayed_us(), 20);
        assert_eq!(dev.history().len(), 4);
    }

    #[test]
    fn test_wait_ready_timeout() {
        let mut dev = DummyNand::new(DummyConfig {
            busy_polls_after_reset: 100,
            ..DummyConfig::default()
        });
        protocol::reset(&mut dev).unwrap();
        assert_eq!(protocol::wait_ready(&mut dev, 10, 50), Err(Error::Timeout));
        assert_eq!(dev.delayed_us(), 50);
    }

    #[test]
    fn test_injected_failure() {
        let mut dev = DummyNand::new(DummyConfig {
            fail_register: Some(opcodes::REG_CFG),
            ..DummyConfig::default()
        });
        assert_eq!(
            protocol::get_feature(&mut dev, opcodes::REG_CFG),
            Err(Error::SpiTransferFailed)
        );
        assert_eq!(protocol::read_status(&mut dev), Ok(0));
    }

    #[test]
    fn test_unsupported_io_mode() {
        let mut dev = DummyNand::new_default();
        let mut buf = [0u8; 4];
        let mut cmd = SpiCommand::read_reg(opcodes::READ_ID, &mut buf).with_io_mode(IoMode::QuadData);
        assert_eq!(dev.execute(&mut cmd), Err(Error::IoModeNotSupported));
        assert!(dev.history().is_empty());
    }

    #[test]
    fn test_unknown_opcode() {
        let mut dev = DummyNand::new_default();
        let mut cmd = SpiCommand::simple(opcodes::BLOCK_ERASE);
        assert_eq!(dev.execute(&mut cmd), Err(Error::OpcodeNotSupported));
    }
}
