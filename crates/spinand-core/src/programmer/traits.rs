//! Programmer trait definitions
//!
//! These traits use `maybe_async` to support both sync and async modes.
//! - By default, traits are async (suitable for WASM/web, Embassy, tokio)
//! - With the `is_sync` feature, traits become synchronous

use crate::error::Result;
use crate::spi::SpiCommand;
use bitflags::bitflags;
use maybe_async::maybe_async;

bitflags! {
    /// SPI master feature flags
    ///
    /// These flags indicate which multi-line transfers a controller can run.
    /// Receive and transmit are reported separately for the data-only modes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpiFeatures: u32 {
        /// Can receive two bits at once (1-1-2 mode)
        const DUAL_IN        = 1 << 0;
        /// Can transmit two bits at once (1-1-2 mode)
        const DUAL_OUT       = 1 << 1;
        /// Can transfer address and data on two lines (1-2-2 mode)
        const DUAL_IO        = 1 << 2;
        /// Can receive four bits at once (1-1-4 mode)
        const QUAD_IN        = 1 << 3;
        /// Can transmit four bits at once (1-1-4 mode)
        const QUAD_OUT       = 1 << 4;
        /// Can transfer address and data on four lines (1-4-4 mode)
        const QUAD_IO        = 1 << 5;

        /// Shorthand for every dual mode
        const DUAL = Self::DUAL_IN.bits() | Self::DUAL_OUT.bits() | Self::DUAL_IO.bits();
        /// Shorthand for every quad mode
        const QUAD = Self::QUAD_IN.bits() | Self::QUAD_OUT.bits() | Self::QUAD_IO.bits();
    }
}

impl Default for SpiFeatures {
    fn default() -> Self {
        SpiFeatures::empty()
    }
}

/// SPI Master trait (sync or async depending on `is_sync` feature)
///
/// This is the bus transaction executor: it owns the physical bus and runs
/// one command at a time. Everything above it (probe, feature register
/// access, ECC status decoding) is expressed as [`SpiCommand`]s.
///
/// ## Example
///
/// ```ignore
/// #[maybe_async(AFIT)]
/// impl SpiMaster for MyController {
///     fn features(&self) -> SpiFeatures {
///         SpiFeatures::DUAL | SpiFeatures::QUAD
///     }
///
///     async fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<()> {
///         self.transfer(cmd).await
///     }
///
///     async fn delay_us(&mut self, us: u32) {
///         self.timer.delay_us(us).await
///     }
/// }
/// ```
#[maybe_async(AFIT)]
pub trait SpiMaster {
    /// Get the features supported by this programmer
    fn features(&self) -> SpiFeatures;

    /// Execute a single SPI command
    ///
    /// The command contains all the information needed for the transaction:
    /// - `opcode`: The SPI command opcode
    /// - `address`: Optional address (with width)
    /// - `io_mode`: The I/O mode to use
    /// - `dummy_cycles`: Number of dummy clock cycles after address
    /// - `write_data`: Data to write after the header
    /// - `read_buf`: Buffer to read data into
    ///
    /// A failed transfer is reported as an error and never retried here.
    async fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<()>;

    /// Delay for the specified number of microseconds
    async fn delay_us(&mut self, us: u32);
}

// Blanket impl for boxed SPI masters to allow trait objects (sync mode only)
// In async mode, traits with async fn are not object-safe
#[cfg(all(feature = "alloc", feature = "is_sync"))]
impl SpiMaster for alloc::boxed::Box<dyn SpiMaster + Send> {
    fn features(&self) -> SpiFeatures {
        (**self).features()
    }

    fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<()> {
        (**self).execute(cmd)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}

/// Helper function for implementing `SpiMaster::execute()`.
///
/// Most byte-stream controllers follow the same pattern:
/// 1. Build a write buffer from the command header + write data
/// 2. Call an internal full-duplex transfer method
/// 3. Copy any read data back into the command's read buffer
///
/// This function handles steps 1 and 3, delegating step 2 to the provided
/// closure. The closure receives the bytes to send and the number of bytes
/// to read back, and returns the bytes it read.
///
/// # Example
///
/// ```ignore
/// fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<()> {
///     default_execute_with_vec(cmd, |write_data, read_len| {
///         self.spi_transfer(write_data, read_len)
///             .map_err(|_| Error::ProgrammerError)
///     })
/// }
/// ```
#[cfg(feature = "alloc")]
pub fn default_execute_with_vec<F>(cmd: &mut SpiCommand<'_>, transfer_fn: F) -> Result<()>
where
    F: FnOnce(&[u8], usize) -> Result<alloc::vec::Vec<u8>>,
{
    let header_len = cmd.header_len();
    let mut write_data = alloc::vec![0u8; header_len + cmd.write_data.len()];
    cmd.encode_header(&mut write_data);
    write_data[header_len..].copy_from_slice(cmd.write_data);

    let read_len = cmd.read_buf.len();
    let result = transfer_fn(&write_data, read_len)?;
    if result.len() < read_len {
        return Err(crate::error::Error::ProgrammerError);
    }
    cmd.read_buf.copy_from_slice(&result[..read_len]);

    Ok(())
}
