//! Programmer traits and abstractions
//!
//! This module defines the bus trait a SPI-NAND controller implements so
//! that the probe flow and vendor ECC decoders can talk to the chip.

mod traits;

pub use traits::*;
