//! # Logo Frame
//!
//! The glowing simple border with an external logo stamped into the
//! border band. A missing or absent logo path is not an error: the bare
//! bordered frame is returned unchanged.

use image::{GenericImageView, imageops};
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::PathBuf;

use crate::config::{DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameConfig, LogoPosition};
use crate::error::FrameError;
use crate::frames::simple::SimpleFrame;

/// Parameters for the logo frame.
#[derive(Debug, Clone)]
pub struct LogoFrame {
    pub width: u32,
    pub height: u32,
    pub logo_path: Option<PathBuf>,
    pub primary_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
    pub logo_position: LogoPosition,
    /// Maximum logo dimension after scaling.
    pub logo_size: u32,
}

impl Default for LogoFrame {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            logo_path: None,
            primary_color: "#FF4081".into(),
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            logo_position: LogoPosition::Bottom,
            logo_size: 150,
        }
    }
}

impl LogoFrame {
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            logo_path: config.logo.clone(),
            primary_color: config.color.clone(),
            border_width: config.border_width,
            corner_radius: config.corner_radius,
            logo_position: config.logo_position,
            logo_size: config.logo_size,
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

        let Some(path) = &self.logo_path else {
            return Ok(frame);
        };
        if !path.exists() {
            return Ok(frame);
        }

        let logo = image::open(path)
            .map_err(|e| FrameError::Image(format!("Failed to load logo {}: {}", path.display(), e)))?;

        // Shrink-only, aspect-preserving: neither dimension may exceed
        // logo_size, small logos are left at their native size
        let logo = if logo.width() > self.logo_size || logo.height() > self.logo_size {
            logo.resize(self.logo_size, self.logo_size, FilterType::Lanczos3)
        } else {
            logo
        };
        let logo = logo.to_rgba8();

        let w = self.width as i32;
        let h = self.height as i32;
        let bw = self.border_width as i32;
        let lw = logo.width() as i32;
        let lh = logo.height() as i32;

        let (x, y) = match self.logo_position {
            LogoPosition::Top => ((w - lw) / 2, (bw - lh) / 2),
            LogoPosition::Bottom => ((w - lw) / 2, h - bw + (bw - lh) / 2),
            // Bottom-right band cell
            LogoPosition::Corners => (w - bw + (bw - lw) / 2, h - bw + (bw - lh) / 2),
        };

        imageops::overlay(&mut frame, &logo, x as i64, y as i64);

        Ok(frame)
    }
}
