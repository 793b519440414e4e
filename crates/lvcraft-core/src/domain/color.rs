//! 24-bit RGB colour passed across the host boundary as `0xRRGGBB`.

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Builds a colour from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored, so `0xFF12_3456` and `0x12_3456`
    /// describe the same colour.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            red: ((hex >> 16) & 0xFF) as u8,
            green: ((hex >> 8) & 0xFF) as u8,
            blue: (hex & 0xFF) as u8,
        }
    }

    /// Packs the colour back into `0xRRGGBB`.
    pub fn to_hex(self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_splits_channels() {
        let c = Color::from_hex(0x12_34_56);
        assert_eq!((c.red, c.green, c.blue), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_from_hex_ignores_alpha_byte() {
        assert_eq!(Color::from_hex(0xFF12_3456), Color::from_hex(0x12_3456));
    }

    #[test]
    fn test_to_hex_packs_channels() {
        let c = Color {
            red: 0xAB,
            green: 0xCD,
            blue: 0xEF,
        };
        assert_eq!(c.to_hex(), 0xAB_CD_EF);
    }
}
