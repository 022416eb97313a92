//! SPI-NAND protocol implementation
//!
//! This module implements the command sequences common to all SPI-NAND
//! devices: reset, READ ID and feature register access.
//!
//! Uses `maybe_async` to support both sync and async modes:
//! - With `is_sync` feature: blocking/synchronous
//! - Without `is_sync` feature: async (for WASM, Embassy, tokio)

use crate::error::{Error, Result};
use crate::programmer::SpiMaster;
use crate::spi::{opcodes, SpiCommand};
use maybe_async::maybe_async;

/// Send the Reset command
#[maybe_async]
pub async fn reset<M: SpiMaster + ?Sized>(master: &mut M) -> Result<()> {
    let mut cmd = SpiCommand::simple(opcodes::RESET);
    master.execute(&mut cmd).await
}

/// Read the raw ID bytes
///
/// The opcode is sent without address or dummy byte, so parts that insert a
/// dummy byte before their ID show up with a placeholder in `id[0]`.
/// Vendor detection is expected to deal with both layouts.
#[maybe_async]
pub async fn read_id<M: SpiMaster + ?Sized>(master: &mut M) -> Result<[u8; opcodes::MAX_ID_LEN]> {
    let mut buf = [0u8; opcodes::MAX_ID_LEN];
    let mut cmd = SpiCommand::read_reg(opcodes::READ_ID, &mut buf);
    master.execute(&mut cmd).await?;
    log::trace!("READ ID: {:02X?}", buf);
    Ok(buf)
}

/// Read a feature register
#[maybe_async]
pub async fn get_feature<M: SpiMaster + ?Sized>(master: &mut M, reg: u8) -> Result<u8> {
    let mut buf = [0u8; 1];
    let mut cmd = SpiCommand::get_feature(opcodes::GET_FEATURE, reg, &mut buf);
    master.execute(&mut cmd).await?;
    Ok(buf[0])
}

/// Write a feature register
#[maybe_async]
pub async fn set_feature<M: SpiMaster + ?Sized>(master: &mut M, reg: u8, value: u8) -> Result<()> {
    let data = [value];
    let mut cmd = SpiCommand::set_feature(opcodes::SET_FEATURE, reg, &data);
    master.execute(&mut cmd).await
}

/// Read the status register
#[maybe_async]
pub async fn read_status<M: SpiMaster + ?Sized>(master: &mut M) -> Result<u8> {
    get_feature(master, opcodes::REG_STATUS).await
}

/// Read-modify-write the configuration register
///
/// Bits in `mask` are replaced by the matching bits of `value`. The write
/// is skipped when nothing would change.
#[maybe_async]
pub async fn update_cfg<M: SpiMaster + ?Sized>(master: &mut M, mask: u8, value: u8) -> Result<()> {
    let cfg = get_feature(master, opcodes::REG_CFG).await?;
    let new = (cfg & !mask) | (value & mask);
    if new == cfg {
        return Ok(());
    }
    set_feature(master, opcodes::REG_CFG, new).await
}

/// Wait for the Operation In Progress bit to clear
///
/// Polls the status register until OIP clears.
///
/// # Arguments
/// * `poll_delay_us` - Delay in microseconds between status register polls
/// * `timeout_us` - Maximum time to wait before returning Error::Timeout
///
/// Returns the last status byte read, so callers can check the fail bits.
#[maybe_async]
pub async fn wait_ready<M: SpiMaster + ?Sized>(
    master: &mut M,
    poll_delay_us: u32,
    timeout_us: u32,
) -> Result<u8> {
    let max_polls = if poll_delay_us > 0 {
        timeout_us / poll_delay_us
    } else {
        timeout_us // Fall back to polling once per microsecond
    };

    for _ in 0..max_polls.max(1) {
        let status = read_status(master).await?;
        if status & opcodes::STATUS_BUSY == 0 {
            return Ok(status);
        }
        if poll_delay_us > 0 {
            master.delay_us(poll_delay_us).await;
        }
    }

    Err(Error::Timeout)
}

/// Reset the device and wait until it is ready again
///
/// A reset can take up to a few hundred microseconds while the device
/// reloads page 0 into its cache.
#[maybe_async]
pub async fn reset_and_wait<M: SpiMaster + ?Sized>(master: &mut M) -> Result<()> {
    reset(master).await?;
    wait_ready(master, RESET_POLL_DELAY_US, RESET_TIMEOUT_US).await?;
    Ok(())
}

/// Delay between status polls after a reset
pub const RESET_POLL_DELAY_US: u32 = 20;
/// Longest time a reset may keep the device busy
pub const RESET_TIMEOUT_US: u32 = 400_000;
