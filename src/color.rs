//! # Color Utilities
//!
//! Hex color string parsing. All user-facing colors are 6-hex-digit strings
//! with an optional leading `#` (e.g. `"#FF4081"` or `"ff4081"`).

use image::Rgba;

use crate::error::FrameError;

/// Parse a hex color string into an RGB triple.
///
/// Accepts exactly 6 hex digits after stripping an optional leading `#`.
/// Anything else fails with [`FrameError::InvalidColorFormat`].
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3], FrameError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FrameError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    // Unreachable error arm: the digit check above guarantees parseability
    let parse = |i| channel(i).map_err(|_| FrameError::InvalidColorFormat(hex.to_string()));

    Ok([parse(0)?, parse(2)?, parse(4)?])
}

/// Parse a hex color string into an RGBA pixel with the given alpha.
pub fn hex_to_rgba(hex: &str, alpha: u8) -> Result<Rgba<u8>, FrameError> {
    let [r, g, b] = hex_to_rgb(hex)?;
    Ok(Rgba([r, g, b, alpha]))
}

/// Parse a hex color string into a fully opaque RGBA pixel.
pub fn hex_to_rgba_opaque(hex: &str) -> Result<Rgba<u8>, FrameError> {
    hex_to_rgba(hex, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF4081").unwrap(), [255, 64, 129]);
        assert_eq!(hex_to_rgb("FF4081").unwrap(), [255, 64, 129]);
        assert_eq!(hex_to_rgb("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(hex_to_rgb("#ffffff").unwrap(), [255, 255, 255]);
    }

    #[test]
    fn test_hex_to_rgb_rejects_bad_input() {
        assert!(matches!(
            hex_to_rgb("#FFF"),
            Err(FrameError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            hex_to_rgb("#FF40811"),
            Err(FrameError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            hex_to_rgb("#GG4081"),
            Err(FrameError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            hex_to_rgb(""),
            Err(FrameError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn test_hex_to_rgba_default_alpha_roundtrip() {
        // hexToRgba(s) == (r, g, b, 255) for every valid color
        for hex in ["#FF4081", "#212121", "#FFFFFF", "#7B1FA2"] {
            let [r, g, b] = hex_to_rgb(hex).unwrap();
            assert_eq!(hex_to_rgba_opaque(hex).unwrap(), Rgba([r, g, b, 255]));
        }
    }

    #[test]
    fn test_hex_to_rgba_custom_alpha() {
        assert_eq!(
            hex_to_rgba("#FF4081", 80).unwrap(),
            Rgba([255, 64, 129, 80])
        );
        assert_eq!(hex_to_rgba("#FF4081", 0).unwrap(), Rgba([255, 64, 129, 0]));
    }
}
