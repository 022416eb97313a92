//! Probe flow

use super::{Manufacturer, SpiNandContext};
use crate::error::Result;
use crate::programmer::SpiMaster;
use crate::protocol;
use crate::spi::opcodes;
use maybe_async::maybe_async;

/// Probe for a chip of `vendor` on `master`
///
/// Resets the device, reads its ID and lets the vendor match it. On a match
/// the cache op encodings are chosen for this bus and, for chips with a
/// Quad Enable bit, QE is set or cleared to agree with them.
///
/// Returns `Ok(None)` when the ID belongs to another vendor. A vendor match
/// with an unknown device code is an error, not `None`.
#[maybe_async]
pub async fn probe<'v, M, V>(
    master: &mut M,
    vendor: &'v V,
) -> Result<Option<SpiNandContext<'v, V::Ecc, V::Oob>>>
where
    M: SpiMaster + ?Sized,
    V: Manufacturer,
{
    protocol::reset_and_wait(master).await?;
    let id = protocol::read_id(master).await?;

    let Some(chip) = vendor.detect(&id)? else {
        log::debug!(
            "{} ({:#04x}): ID {:02X?} not recognised",
            vendor.name(),
            vendor.id(),
            id
        );
        return Ok(None);
    };

    let ctx = SpiNandContext::new(chip, master.features())?;

    if chip.has_qe_bit() {
        let qe = if ctx.needs_quad_enable() {
            opcodes::CFG_QUAD_ENABLE
        } else {
            0
        };
        protocol::update_cfg(master, opcodes::CFG_QUAD_ENABLE, qe).await?;
    }

    let org = ctx.memorg();
    log::info!(
        "Found: {} {} ({} MiB, {}+{} byte pages)",
        vendor.name(),
        chip.name,
        org.total_size() / (1024 * 1024),
        org.page_size,
        org.oob_size
    );
    log::debug!(
        "{}: read cache op {:#04x}, write cache op {:#04x}, update cache op {:#04x}",
        chip.name,
        ctx.read_cache.opcode,
        ctx.write_cache.opcode,
        ctx.update_cache.opcode
    );

    Ok(Some(ctx))
}
