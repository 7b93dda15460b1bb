//! # Text Frame
//!
//! The glowing simple border with an event caption (and optional date)
//! centered in the top and/or bottom band. Text renders with a soft
//! drop shadow: a half-transparent black pass offset (+2, +2) under the
//! colored pass.

use image::{Rgba, RgbaImage};
use std::path::PathBuf;

use crate::color::hex_to_rgba_opaque;
use crate::config::{DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameConfig, TextPosition};
use crate::error::FrameError;
use crate::font::{FontSource, resolve_font};
use crate::frames::simple::SimpleFrame;

/// Fixed caption sizes, in pixels.
const TITLE_SIZE: f32 = 48.0;
const DATE_SIZE: f32 = 32.0;

/// Vertical gap between the event name and the date line in the bottom band.
const DATE_GAP: i32 = 50;

const SHADOW_OFFSET: i32 = 2;
const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 128]);

/// Parameters for the text frame.
#[derive(Debug, Clone)]
pub struct TextFrame {
    pub width: u32,
    pub height: u32,
    pub event_name: String,
    pub event_date: Option<String>,
    pub primary_color: String,
    pub text_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
    pub text_position: TextPosition,
    pub font_path: Option<PathBuf>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            event_name: "Event Name".into(),
            event_date: None,
            primary_color: "#FF4081".into(),
            text_color: "#FFFFFF".into(),
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            text_position: TextPosition::Bottom,
            font_path: None,
        }
    }
}

impl TextFrame {
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            event_name: config.event.clone(),
            event_date: config.date.clone(),
            primary_color: config.color.clone(),
            text_color: config.text_color.clone(),
            border_width: config.border_width,
            corner_radius: config.corner_radius,
            text_position: config.text_position,
            font_path: config.font.clone(),
        }
    }

    pub fn generate(&self) -> Result<RgbaImage, FrameError> {
        let mut frame = SimpleFrame {
            width: self.width,
            height: self.height,
            border_width: self.border_width,
            border_color: self.primary_color.clone(),
            corner_radius: self.corner_radius,
            inner_glow: true,
        }
        .generate()?;

        let text_color = hex_to_rgba_opaque(&self.text_color)?;
        let font = resolve_font(self.font_path.as_deref());

        let w = self.width as i32;
        let h = self.height as i32;
        let bw = self.border_width as i32;

        let draw_centered = |frame: &mut RgbaImage, text: &str, y: i32, px: f32| {
            let text_width = font.measure(text, px) as i32;
            let x = (w - text_width) / 2;
            font.draw(frame, text, x + SHADOW_OFFSET, y + SHADOW_OFFSET, px, SHADOW_COLOR);
            font.draw(frame, text, x, y, px, text_color);
        };

        if matches!(self.text_position, TextPosition::Bottom | TextPosition::Both) {
            // Event name centered in the bottom band
            let text_y = h - bw + (bw - TITLE_SIZE as i32) / 2;
            draw_centered(&mut frame, &self.event_name, text_y, TITLE_SIZE);

            if let Some(date) = &self.event_date {
                let date_y = text_y + DATE_GAP;
                if date_y + (DATE_SIZE as i32) < h {
                    draw_centered(&mut frame, date, date_y, DATE_SIZE);
                }
            }
        }

        if matches!(self.text_position, TextPosition::Top | TextPosition::Both) {
            let text_y = (bw - TITLE_SIZE as i32) / 2;
            if self.text_position == TextPosition::Both && self.event_date.is_some() {
                // With both bands in play the date takes the top band
                let date = self.event_date.as_deref().unwrap_or_default();
                draw_centered(&mut frame, date, text_y + 8, DATE_SIZE);
            } else {
                draw_centered(&mut frame, &self.event_name, text_y, TITLE_SIZE);
            }
        }

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big_band() -> TextFrame {
        // A band tall enough to hold the 48px title comfortably
        TextFrame {
            width: 600,
            height: 800,
            border_width: 120,
            corner_radius: 0,
            event_name: "Wedding".into(),
            ..Default::default()
        }
    }

    /// Band pixels that differ from the plain glowing border mark rendered
    /// text (glyph or shadow).
    fn band_pixels_changed(frame: &RgbaImage, reference: &RgbaImage) -> usize {
        frame
            .pixels()
            .zip(reference.pixels())
            .filter(|(a, b)| a != b)
            .count()
    }

    fn reference_border(params: &TextFrame) -> RgbaImage {
        SimpleFrame {
            width: params.width,
            height: params.height,
            border_width: params.border_width,
            border_color: params.primary_color.clone(),
            corner_radius: params.corner_radius,
            inner_glow: true,
        }
        .generate()
        .unwrap()
    }

    #[test]
    fn test_bottom_text_draws_in_bottom_band_only() {
        let params = big_band();
        let frame = params.generate().unwrap();
        let reference = reference_border(&params);
        assert!(band_pixels_changed(&frame, &reference) > 0);

        // All changes are below the interior (bottom band starts at y=680)
        for (x, y, px) in frame.enumerate_pixels() {
            if px != reference.get_pixel(x, y) {
                assert!(y >= 680, "unexpected text pixel at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_top_text_draws_in_top_band_only() {
        let params = TextFrame {
            text_position: TextPosition::Top,
            ..big_band()
        };
        let frame = params.generate().unwrap();
        let reference = reference_border(&params);
        for (x, y, px) in frame.enumerate_pixels() {
            if px != reference.get_pixel(x, y) {
                assert!(y < 120, "unexpected text pixel at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_both_positions_draw_both_bands() {
        let params = TextFrame {
            text_position: TextPosition::Both,
            event_date: Some("Jan 31, 2026".into()),
            ..big_band()
        };
        let frame = params.generate().unwrap();
        let reference = reference_border(&params);
        let top_changed = frame
            .enumerate_pixels()
            .any(|(x, y, px)| y < 120 && px != reference.get_pixel(x, y));
        let bottom_changed = frame
            .enumerate_pixels()
            .any(|(x, y, px)| y >= 680 && px != reference.get_pixel(x, y));
        assert!(top_changed && bottom_changed);
    }

    #[test]
    fn test_repeat_renders_are_bit_identical() {
        let params = TextFrame {
            event_date: Some("Jan 31, 2026".into()),
            text_position: TextPosition::Both,
            ..big_band()
        };
        let a = params.generate().unwrap();
        let b = params.generate().unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_extreme_border_does_not_panic() {
        // Placement arithmetic may go negative; drawing must clip, not panic
        let params = TextFrame {
            border_width: 10,
            ..big_band()
        };
        params.generate().unwrap();
    }
}
