//! # Simple Border Frame
//!
//! A solid rounded border with a transparent interior and an optional
//! inner glow: thin concentric rings just inside the inner edge whose
//! alpha fades from 80 down to 0, softening the transition into the
//! camera feed.

use image::{Rgba, RgbaImage};

use crate::color::{hex_to_rgb, hex_to_rgba_opaque};
use crate::config::{DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameConfig};
use crate::draw::{cut_interior, fill_rounded_rect, stroke_inset_rounded_rect};
use crate::error::FrameError;

/// Parameters for the simple border frame.
#[derive(Debug, Clone)]
pub struct SimpleFrame {
    pub width: u32,
    pub height: u32,
    pub border_width: u32,
    /// Border color as a hex string.
    pub border_color: String,
    pub corner_radius: u32,
    pub inner_glow: bool,
}

impl Default for SimpleFrame {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: "#FF4081".into(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            inner_glow: true,
        }
    }
}

impl SimpleFrame {
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            border_width: config.border_width,
            border_color: config.color.clone(),
            corner_radius: config.corner_radius,
            inner_glow: config.inner_glow,
        }
    }

    /// Generate the frame. Deterministic for a given parameter set.
    pub fn generate(&self) -> Result<RgbaImage, FrameError> {
        let color = hex_to_rgba_opaque(&self.border_color)?;
        let mut frame = RgbaImage::new(self.width, self.height);

        fill_rounded_rect(&mut frame, self.corner_radius, color);
        cut_interior(&mut frame, self.border_width, self.corner_radius);

        if self.inner_glow {
            let glow_width = self.border_width / 3;
            let [r, g, b] = hex_to_rgb(&self.border_color)?;
            for i in 0..glow_width {
                let alpha = (80.0 * (1.0 - i as f32 / glow_width as f32)) as u8;
                let offset = self.border_width - glow_width + i;
                stroke_inset_rounded_rect(
                    &mut frame,
                    offset,
                    self.corner_radius.saturating_sub(offset),
                    1,
                    Rgba([r, g, b, alpha]),
                );
            }
        }

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SimpleFrame {
        SimpleFrame {
            width: 200,
            height: 300,
            border_width: 30,
            corner_radius: 0,
            inner_glow: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_border_band_opaque_interior_transparent() {
        let frame = small().generate().unwrap();
        // Band pixels on all four sides
        assert_eq!(*frame.get_pixel(5, 150), Rgba([255, 64, 129, 255]));
        assert_eq!(*frame.get_pixel(194, 150), Rgba([255, 64, 129, 255]));
        assert_eq!(*frame.get_pixel(100, 5), Rgba([255, 64, 129, 255]));
        assert_eq!(*frame.get_pixel(100, 294), Rgba([255, 64, 129, 255]));
        // Interior
        assert_eq!(frame.get_pixel(100, 150)[3], 0);
        assert_eq!(frame.get_pixel(31, 31)[3], 0);
    }

    #[test]
    fn test_rounded_outer_corner_is_transparent() {
        let frame = SimpleFrame {
            corner_radius: 40,
            ..small()
        }
        .generate()
        .unwrap();
        assert_eq!(frame.get_pixel(0, 0)[3], 0);
        assert_eq!(frame.get_pixel(199, 299)[3], 0);
    }

    #[test]
    fn test_inner_glow_fades_inward() {
        let frame = SimpleFrame {
            inner_glow: true,
            ..small()
        }
        .generate()
        .unwrap();
        // glow_width = 10; ring offsets 20..30, alpha 80 down toward 0
        let first_ring = frame.get_pixel(100, 20)[3];
        let later_ring = frame.get_pixel(100, 28)[3];
        assert_eq!(first_ring, 80);
        assert!(later_ring < first_ring && later_ring > 0);
        // Outer part of the band stays fully opaque
        assert_eq!(frame.get_pixel(100, 10)[3], 255);
    }

    #[test]
    fn test_invalid_color_propagates() {
        let result = SimpleFrame {
            border_color: "#XYZ".into(),
            ..small()
        }
        .generate();
        assert!(matches!(result, Err(FrameError::InvalidColorFormat(_))));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = SimpleFrame {
            inner_glow: true,
            corner_radius: 24,
            ..small()
        };
        let a = params.generate().unwrap();
        let b = params.generate().unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
