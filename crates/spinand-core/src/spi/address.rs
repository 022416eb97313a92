//! Address width types

/// Address width for SPI-NAND commands
///
/// SPI-NAND never addresses the array directly: feature registers take one
/// address byte, cache accesses take a two-byte column (three bytes for
/// parts that expect a leading dummy address byte), and page/block
/// operations take a three-byte row address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AddressWidth {
    /// No address phase
    #[default]
    None,
    /// 1-byte address (feature register number)
    OneByte,
    /// 2-byte address (cache column)
    TwoByte,
    /// 3-byte address (row address, or column with a leading dummy byte)
    ThreeByte,
}

impl AddressWidth {
    /// Returns the number of address bytes
    pub const fn bytes(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::OneByte => 1,
            Self::TwoByte => 2,
            Self::ThreeByte => 3,
        }
    }

    /// Encode an address into bytes, most significant byte first
    pub fn encode(&self, address: u32, buf: &mut [u8]) {
        let n = self.bytes() as usize;
        for (i, byte) in buf[..n].iter_mut().enumerate() {
            *byte = (address >> (8 * (n - 1 - i))) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_big_endian() {
        let mut buf = [0u8; 3];
        AddressWidth::ThreeByte.encode(0x01_0203, &mut buf);
        assert_eq!(buf, [0x01, 0x02, 0x03]);

        let mut buf = [0u8; 2];
        AddressWidth::TwoByte.encode(0x0800, &mut buf);
        assert_eq!(buf, [0x08, 0x00]);

        let mut buf = [0u8; 1];
        AddressWidth::OneByte.encode(0xC0, &mut buf);
        assert_eq!(buf, [0xC0]);
    }
}
