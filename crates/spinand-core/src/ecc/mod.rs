//! On-die ECC reporting and OOB layouts
//!
//! Every SPI-NAND vendor encodes ECC health differently in its status
//! register and reserves different OOB bytes for parity. Vendor modules
//! implement [`EccStatusDecoder`] and [`OobLayout`] (normally on small
//! enums) and reference one of each from every chip descriptor.

mod layout;

pub use layout::{OobLayout, OobRegion};

use crate::error::Result;
use crate::programmer::SpiMaster;
use maybe_async::maybe_async;

/// Translate a status register byte into a corrected bit-flip count
///
/// Called by the framework after every page read. Decoders hold no state:
/// the same status byte (and the same auxiliary register contents) always
/// yields the same answer.
#[maybe_async(AFIT)]
pub trait EccStatusDecoder {
    /// Decode `status`, read from the status register after a page read
    ///
    /// Returns the number of corrected bit flips, `EccUncorrectable` when
    /// the page is lost, or `EccInvalidStatus` for undocumented encodings.
    /// `master` is available to decoders that need one more register read;
    /// errors from that read are returned unchanged.
    async fn decode<M: SpiMaster + ?Sized>(&self, master: &mut M, status: u8) -> Result<u32>;
}
