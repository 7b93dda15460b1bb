//! # Decorative Frame
//!
//! The solid border plus ornament: a thin accent outline inset into the
//! band and, optionally, a two-tone dot in each corner of the band.

use image::RgbaImage;
use imageproc::drawing::draw_filled_circle_mut;

use crate::color::hex_to_rgba_opaque;
use crate::config::{CornerStyle, DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameConfig};
use crate::draw::{cut_interior, fill_rounded_rect, stroke_inset_rounded_rect};
use crate::error::FrameError;

/// Corner dot geometry: outer/inner fill radii.
const CORNER_DOT_OUTER: i32 = 20;
const CORNER_DOT_INNER: i32 = 10;

/// Parameters for the decorative frame.
#[derive(Debug, Clone)]
pub struct DecorativeFrame {
    pub width: u32,
    pub height: u32,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
    pub corner_style: CornerStyle,
    pub show_corners: bool,
}

impl Default for DecorativeFrame {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            primary_color: "#FF4081".into(),
            secondary_color: "#212121".into(),
            accent_color: "#FFFFFF".into(),
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            corner_style: CornerStyle::Rounded,
            show_corners: true,
        }
    }
}

impl DecorativeFrame {
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            primary_color: config.color.clone(),
            secondary_color: config.secondary_color.clone(),
            accent_color: config.accent_color.clone(),
            border_width: config.border_width,
            corner_radius: config.corner_radius,
            corner_style: config.corner_style,
            show_corners: config.show_corners,
        }
    }

    pub fn generate(&self) -> Result<RgbaImage, FrameError> {
        let primary = hex_to_rgba_opaque(&self.primary_color)?;
        let secondary = hex_to_rgba_opaque(&self.secondary_color)?;
        let accent = hex_to_rgba_opaque(&self.accent_color)?;

        let radius = match self.corner_style {
            CornerStyle::Rounded => self.corner_radius,
            CornerStyle::Square => 0,
        };

        let mut frame = RgbaImage::new(self.width, self.height);
        fill_rounded_rect(&mut frame, radius, primary);

        // Accent outline inset into the band
        let accent_offset = self.border_width / 4;
        stroke_inset_rounded_rect(
            &mut frame,
            accent_offset,
            radius.saturating_sub(accent_offset),
            2,
            accent,
        );

        cut_interior(&mut frame, self.border_width, radius);

        // Corner dots sit on the band (corner_size >= border_width by
        // configuration), drawn after the cutout so they stay on top
        if self.show_corners {
            let corner_size = (self.border_width * 2) as i32;
            let w = self.width as i32;
            let h = self.height as i32;
            let anchors = [
                (corner_size, corner_size),
                (w - corner_size, corner_size),
                (corner_size, h - corner_size),
                (w - corner_size, h - corner_size),
            ];
            for (cx, cy) in anchors {
                draw_filled_circle_mut(&mut frame, (cx, cy), CORNER_DOT_OUTER, secondary);
                draw_filled_circle_mut(&mut frame, (cx, cy), CORNER_DOT_INNER, accent);
            }
        }

        Ok(frame)
    }
}
