//! Error types for spinand-core
//!
//! This module provides a no_std compatible error type that is shared by the
//! bus layer, the probe flow and every vendor module.

use thiserror::Error;

/// Core error type - no_std compatible, Copy for efficiency
///
/// "Not this vendor" is deliberately absent: detection reports it as
/// `Ok(None)` so the caller can move on to the next manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    // SPI errors
    /// SPI transfer failed
    #[error("SPI transfer failed")]
    SpiTransferFailed,
    /// SPI operation timed out
    #[error("SPI operation timed out")]
    SpiTimeout,
    /// Opcode is not supported by the programmer
    #[error("SPI opcode not supported by programmer")]
    OpcodeNotSupported,
    /// Requested I/O mode is not supported by the programmer
    #[error("I/O mode not supported by programmer")]
    IoModeNotSupported,
    /// Provided buffer is too small for the operation
    #[error("buffer too small")]
    BufferTooSmall,
    /// General programmer error
    #[error("programmer error")]
    ProgrammerError,
    /// Device stayed busy past the polling deadline
    #[error("operation timed out")]
    Timeout,

    // Chip errors
    /// Manufacturer matched but the device code is not in its table
    #[error("unsupported device: device code not in chip table")]
    ChipNotFound,
    /// Chip known, but none of its op variants can run on this bus
    #[error("flash chip not supported by this bus")]
    ChipNotSupported,

    // ECC errors
    /// On-die ECC could not correct the page
    #[error("uncorrectable ECC error")]
    EccUncorrectable,
    /// Status byte holds an ECC encoding no datasheet documents
    #[error("invalid ECC status encoding")]
    EccInvalidStatus,

    // Layout errors
    /// OOB layout queried with a section index past the last section
    #[error("OOB section out of range")]
    OobSectionOutOfRange,
}

impl Error {
    /// Negative errno equivalent, as returned by a C-style prober dispatch
    pub const fn errno(&self) -> i32 {
        match self {
            Self::SpiTransferFailed | Self::ProgrammerError => -errno::EIO,
            Self::SpiTimeout | Self::Timeout => -errno::ETIMEDOUT,
            Self::OpcodeNotSupported | Self::IoModeNotSupported => -errno::EOPNOTSUPP,
            Self::BufferTooSmall | Self::EccInvalidStatus => -errno::EINVAL,
            Self::ChipNotFound | Self::ChipNotSupported => -errno::ENOTSUPP,
            Self::EccUncorrectable => -errno::EBADMSG,
            Self::OobSectionOutOfRange => -errno::ERANGE,
        }
    }

    /// Returns true for errors raised by the bus rather than by decoding
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::SpiTransferFailed
                | Self::SpiTimeout
                | Self::OpcodeNotSupported
                | Self::IoModeNotSupported
                | Self::BufferTooSmall
                | Self::ProgrammerError
                | Self::Timeout
        )
    }
}

/// Linux errno values used by [`Error::errno`]
pub mod errno {
    /// I/O error
    pub const EIO: i32 = 5;
    /// Invalid argument
    pub const EINVAL: i32 = 22;
    /// Result out of range
    pub const ERANGE: i32 = 34;
    /// Not a data message (uncorrectable ECC)
    pub const EBADMSG: i32 = 74;
    /// Operation not supported on transport endpoint
    pub const EOPNOTSUPP: i32 = 95;
    /// Connection timed out
    pub const ETIMEDOUT: i32 = 110;
    /// Operation is not supported (kernel internal)
    pub const ENOTSUPP: i32 = 524;
}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
