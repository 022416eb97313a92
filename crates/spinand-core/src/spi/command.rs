//! SPI command structure

use super::{AddressWidth, IoMode};

/// A single SPI transaction
///
/// Designed to avoid allocation - uses slices for data.
/// The lifetime parameter `'a` ties the command to the buffers it references.
pub struct SpiCommand<'a> {
    /// The opcode byte
    pub opcode: u8,

    /// Address (if any)
    pub address: Option<u32>,

    /// Address width
    pub address_width: AddressWidth,

    /// I/O mode
    pub io_mode: IoMode,

    /// Number of dummy cycles after address
    pub dummy_cycles: u8,

    /// Data to write after opcode/address/dummy
    pub write_data: &'a [u8],

    /// Buffer to read into (mutable)
    pub read_buf: &'a mut [u8],
}

impl<'a> SpiCommand<'a> {
    /// Create a simple command with no address or data (e.g., RESET)
    pub fn simple(opcode: u8) -> Self {
        Self {
            opcode,
            address: None,
            address_width: AddressWidth::None,
            io_mode: IoMode::Single,
            dummy_cycles: 0,
            write_data: &[],
            read_buf: &mut [],
        }
    }

    /// Create a read command with no address (e.g., READ ID)
    pub fn read_reg(opcode: u8, buf: &'a mut [u8]) -> Self {
        Self {
            opcode,
            address: None,
            address_width: AddressWidth::None,
            io_mode: IoMode::Single,
            dummy_cycles: 0,
            write_data: &[],
            read_buf: buf,
        }
    }

    /// Create a feature register read (GET FEATURE)
    pub fn get_feature(opcode: u8, reg: u8, buf: &'a mut [u8]) -> Self {
        Self {
            opcode,
            address: Some(reg as u32),
            address_width: AddressWidth::OneByte,
            io_mode: IoMode::Single,
            dummy_cycles: 0,
            write_data: &[],
            read_buf: buf,
        }
    }

    /// Create a feature register write (SET FEATURE)
    pub fn set_feature(opcode: u8, reg: u8, data: &'a [u8]) -> Self {
        Self {
            opcode,
            address: Some(reg as u32),
            address_width: AddressWidth::OneByte,
            io_mode: IoMode::Single,
            dummy_cycles: 0,
            write_data: data,
            read_buf: &mut [],
        }
    }

    /// Set the I/O mode for this command
    pub fn with_io_mode(mut self, mode: IoMode) -> Self {
        self.io_mode = mode;
        self
    }

    /// Set the number of dummy cycles
    pub fn with_dummy_cycles(mut self, cycles: u8) -> Self {
        self.dummy_cycles = cycles;
        self
    }

    /// Returns true if this command has a read phase
    pub fn has_read(&self) -> bool {
        !self.read_buf.is_empty()
    }

    /// Returns true if this command has a write phase
    pub fn has_write(&self) -> bool {
        !self.write_data.is_empty()
    }

    /// Returns true if this command has an address phase
    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }

    /// Length of the opcode + address + dummy header in bytes
    pub fn header_len(&self) -> usize {
        let dummy_bytes =
            self.dummy_cycles as usize * self.io_mode.addr_lines() as usize / 8;
        1 + self.address_width.bytes() as usize + dummy_bytes
    }

    /// Encode the opcode + address + dummy header into `buf`
    ///
    /// Dummy bytes are sent as zero. `buf` must hold at least
    /// [`header_len`](Self::header_len) bytes.
    pub fn encode_header(&self, buf: &mut [u8]) {
        let header_len = self.header_len();
        buf[0] = self.opcode;
        let addr_len = self.address_width.bytes() as usize;
        self.address_width
            .encode(self.address.unwrap_or(0), &mut buf[1..1 + addr_len]);
        for byte in &mut buf[1 + addr_len..header_len] {
            *byte = 0;
        }
    }
}
