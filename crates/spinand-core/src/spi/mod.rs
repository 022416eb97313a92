//! SPI types and command structures
//!
//! This module provides types for representing SPI transactions, I/O modes,
//! the SPI-NAND opcode set and the op templates vendor tables are built from.

mod address;
mod command;
mod io_mode;
mod op;
pub mod opcodes;

pub use address::AddressWidth;
pub use command::SpiCommand;
pub use io_mode::{check_io_mode_supported, DataDirection, IoMode};
pub use op::{select_op_variant, SpiNandOp};
pub use opcodes::*;
