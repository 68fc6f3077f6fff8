//! Emblem colors.

use image::Rgb;
use palette::Srgb;

/// The two colors every emblem is painted with.
///
/// The background fills the whole canvas; the accent is used for the ring,
/// the satellite dots and the center dot alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmblemPalette {
    /// Canvas fill, `#0f172a`.
    pub background: Srgb<u8>,
    /// Ring and dot color, `#06b6d4`.
    pub accent: Srgb<u8>,
}

impl Default for EmblemPalette {
    fn default() -> Self {
        Self {
            background: Srgb::new(0x0f, 0x17, 0x2a),
            accent: Srgb::new(0x06, 0xb6, 0xd4),
        }
    }
}

/// Formats a color as lowercase `#rrggbb`, the form SVG paint attributes take.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Converts a color to an `image` RGB pixel.
pub fn to_pixel(color: Srgb<u8>) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_palette_matches_hex_values() {
        let palette = EmblemPalette::default();
        assert_eq!(palette.background, Srgb::<u8>::from_str("#0f172a").unwrap());
        assert_eq!(palette.accent, Srgb::<u8>::from_str("#06b6d4").unwrap());
    }

    #[test]
    fn hex_formatting_zero_pads() {
        assert_eq!(to_hex(Srgb::new(0x0f, 0x17, 0x2a)), "#0f172a");
        assert_eq!(to_hex(Srgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn pixel_conversion() {
        assert_eq!(to_pixel(Srgb::new(6, 182, 212)).0, [6, 182, 212]);
    }
}
