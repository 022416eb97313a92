//! SPI I/O modes

use crate::error::{Error, Result};
use crate::programmer::SpiFeatures;

/// I/O mode for SPI transactions
///
/// Represents how many lines each phase of a transfer uses. SPI-NAND
/// commands are always sent on a single line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IoMode {
    /// Standard SPI: 1-1-1 (cmd, addr, data all on single line)
    #[default]
    Single,
    /// Dual data: 1-1-2 (data phase on 2 lines)
    DualData,
    /// Dual I/O: 1-2-2 (addr, dummy and data on 2 lines)
    DualIo,
    /// Quad data: 1-1-4 (data phase on 4 lines)
    QuadData,
    /// Quad I/O: 1-4-4 (addr, dummy and data on 4 lines)
    QuadIo,
}

impl IoMode {
    /// Returns the number of data lines used for the address phase
    pub const fn addr_lines(&self) -> u8 {
        match self {
            Self::Single | Self::DualData | Self::QuadData => 1,
            Self::DualIo => 2,
            Self::QuadIo => 4,
        }
    }

    /// Returns the number of data lines used for the data phase
    pub const fn data_lines(&self) -> u8 {
        match self {
            Self::Single => 1,
            Self::DualData | Self::DualIo => 2,
            Self::QuadData | Self::QuadIo => 4,
        }
    }

    /// Returns true if this mode requires quad I/O capability
    pub const fn requires_quad(&self) -> bool {
        matches!(self, Self::QuadData | Self::QuadIo)
    }
}

/// Direction of the data phase of a transfer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataDirection {
    /// No data phase
    #[default]
    None,
    /// Device to host
    In,
    /// Host to device
    Out,
}

/// Check if a programmer supports the requested I/O mode
///
/// Multi-line data phases are checked per direction since controllers often
/// support quad receive without quad transmit.
///
/// Returns `Ok(())` if the mode is supported, or `Err(IoModeNotSupported)` if not.
pub fn check_io_mode_supported(
    mode: IoMode,
    direction: DataDirection,
    features: SpiFeatures,
) -> Result<()> {
    let required = match (mode, direction) {
        (IoMode::Single, _) => SpiFeatures::empty(),
        (IoMode::DualData, DataDirection::Out) => SpiFeatures::DUAL_OUT,
        (IoMode::DualData, _) => SpiFeatures::DUAL_IN,
        (IoMode::DualIo, _) => SpiFeatures::DUAL_IO,
        (IoMode::QuadData, DataDirection::Out) => SpiFeatures::QUAD_OUT,
        (IoMode::QuadData, _) => SpiFeatures::QUAD_IN,
        (IoMode::QuadIo, _) => SpiFeatures::QUAD_IO,
    };

    if features.contains(required) {
        Ok(())
    } else {
        Err(Error::IoModeNotSupported)
    }
}
