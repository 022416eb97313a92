//! spinand-core - Core library for SPI-NAND vendor modules
//!
//! This crate holds everything a SPI-NAND manufacturer module plugs into:
//! the bus trait used to execute commands, the chip descriptor types, the
//! ECC status and OOB layout strategy traits, and the generic probe flow
//! that turns a raw READ ID response into a usable device context. It is
//! designed to be `no_std` compatible for use in embedded environments.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable heap allocation (boxed bus trait objects)
//! - `is_sync` - Compile the bus trait and protocol helpers as blocking code
//!
//! # Example
//!
//! ```ignore
//! use spinand_core::{nand, programmer::SpiMaster};
//!
//! fn probe_chip<M: SpiMaster, V: nand::Manufacturer>(master: &mut M, vendor: &V) {
//!     match nand::probe(master, vendor) {
//!         Ok(Some(ctx)) => {
//!             println!("Found: {} {}", vendor.name(), ctx.chip.name);
//!             println!("Size: {} bytes", ctx.chip.memorg.total_size());
//!         }
//!         Ok(None) => println!("Not a {} device", vendor.name()),
//!         Err(e) => println!("Probe failed: {}", e),
//!     }
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
// Allow async fn in traits - we use maybe-async for dual sync/async support
#![allow(async_fn_in_trait)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod chip;
pub mod ecc;
pub mod error;
pub mod nand;
pub mod programmer;
pub mod protocol;
pub mod spi;

pub use error::{Error, Result};
