//! SPI-NAND chip types and tables
//!
//! This module provides types for describing SPI-NAND chips and their
//! capabilities, and the immutable table vendor modules look chips up in.

mod features;
mod table;
mod types;

pub use features::Features;
pub use table::ChipTable;
pub use types::*;
