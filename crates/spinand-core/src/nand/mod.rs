//! SPI-NAND device identification
//!
//! This module connects vendor modules to the bus: the [`Manufacturer`]
//! trait each vendor implements, the [`probe`] flow that resets the chip,
//! reads its ID and asks the vendor to match it, and the
//! [`SpiNandContext`] handed back to the caller on a match.

mod context;
mod manufacturer;
mod probe;

pub use context::SpiNandContext;
pub use manufacturer::Manufacturer;
pub use probe::probe;
