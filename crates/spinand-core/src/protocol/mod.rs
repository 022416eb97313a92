//! Protocol implementations
//!
//! This module contains the SPI-NAND command sequences shared by every
//! vendor.

pub mod spinand;

pub use spinand::*;
