//! SPI-NAND opcodes, feature registers and register bits
//!
//! SPI-NAND devices share one command set across vendors; vendor specific
//! registers live next to the vendor's chip table.

// ============================================================================
// Device control
// ============================================================================

/// Reset - aborts any operation and reloads the power-on defaults
pub const RESET: u8 = 0xFF;

// ============================================================================
// Identification and feature registers
// ============================================================================

/// Read ID (manufacturer + device ID)
pub const READ_ID: u8 = 0x9F;
/// Get Feature - read a feature register
pub const GET_FEATURE: u8 = 0x0F;
/// Set Feature - write a feature register
pub const SET_FEATURE: u8 = 0x1F;

// ============================================================================
// Array access
// ============================================================================

/// Read From Cache (slow, single I/O)
pub const READ_FROM_CACHE: u8 = 0x03;
/// Read From Cache (fast, single I/O)
pub const READ_FROM_CACHE_FAST: u8 = 0x0B;
/// Read From Cache x2 (1-1-2)
pub const READ_FROM_CACHE_X2: u8 = 0x3B;
/// Read From Cache x4 (1-1-4)
pub const READ_FROM_CACHE_X4: u8 = 0x6B;
/// Read From Cache Dual I/O (1-2-2)
pub const READ_FROM_CACHE_DUALIO: u8 = 0xBB;
/// Read From Cache Quad I/O (1-4-4)
pub const READ_FROM_CACHE_QUADIO: u8 = 0xEB;
/// Program Load - resets the cache to 0xFF before loading
pub const PROG_LOAD: u8 = 0x02;
/// Program Load Random Data - keeps the current cache contents
pub const PROG_LOAD_RANDOM: u8 = 0x84;
/// Program Load x4
pub const PROG_LOAD_X4: u8 = 0x32;
/// Program Load Random Data x4
pub const PROG_LOAD_RANDOM_X4: u8 = 0x34;
/// Block Erase
pub const BLOCK_ERASE: u8 = 0xD8;

// ============================================================================
// Feature register addresses
// ============================================================================

/// Block lock register
pub const REG_BLOCK_LOCK: u8 = 0xA0;
/// Configuration register
pub const REG_CFG: u8 = 0xB0;
/// Status register
pub const REG_STATUS: u8 = 0xC0;

// ============================================================================
// Status register bits
// ============================================================================

/// Operation In Progress
pub const STATUS_BUSY: u8 = 1 << 0;
/// Two-bit ECC status field (bits 5:4)
pub const STATUS_ECC_MASK: u8 = 0x3 << 4;
/// ECC field: no bit flips
pub const STATUS_ECC_NO_BITFLIPS: u8 = 0 << 4;
/// ECC field: uncorrectable error
pub const STATUS_ECC_UNCOR_ERROR: u8 = 2 << 4;

// ============================================================================
// Configuration register bits
// ============================================================================

/// Quad Enable - must be set before any 4-line transfer
pub const CFG_QUAD_ENABLE: u8 = 1 << 0;
/// On-die ECC enable
pub const CFG_ECC_ENABLE: u8 = 1 << 4;

// ============================================================================
// Identification
// ============================================================================

/// Number of bytes returned by READ ID that detection looks at
pub const MAX_ID_LEN: usize = 4;
