//! # Gradient Frame
//!
//! A border band swept by a two-color linear gradient. The fill is
//! batched row-wise (a full row inside the top/bottom bands, two short
//! spans elsewhere) and rows are evaluated in parallel. Horizontal
//! gradients precompute one color per column; vertical gradients one
//! color per row; diagonal interpolates per pixel within the spans.

use image::RgbaImage;
use rayon::prelude::*;

use crate::color::hex_to_rgb;
use crate::config::{DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameConfig, GradientDirection};
use crate::draw::{apply_outer_mask, cut_interior};
use crate::error::FrameError;

/// Parameters for the gradient frame.
#[derive(Debug, Clone)]
pub struct GradientFrame {
    pub width: u32,
    pub height: u32,
    pub start_color: String,
    pub end_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
    pub direction: GradientDirection,
}

impl Default for GradientFrame {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start_color: "#FF4081".into(),
            end_color: "#7B1FA2".into(),
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            direction: GradientDirection::Diagonal,
        }
    }
}

impl GradientFrame {
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            start_color: config.start_color.clone(),
            end_color: config.end_color.clone(),
            border_width: config.border_width,
            corner_radius: config.corner_radius,
            direction: config.gradient_direction,
        }
    }

    pub fn generate(&self) -> Result<RgbaImage, FrameError> {
        let start = hex_to_rgb(&self.start_color)?;
        let end = hex_to_rgb(&self.end_color)?;

        let (w, h) = (self.width, self.height);
        let bw = self.border_width;

        let lerp = |t: f32| -> [u8; 4] {
            let ch = |i: usize| (start[i] as f32 + (end[i] as f32 - start[i] as f32) * t) as u8;
            [ch(0), ch(1), ch(2), 255]
        };

        // Column LUT shared by every row of a horizontal gradient
        let column_lut: Option<Vec<[u8; 4]>> = match self.direction {
            GradientDirection::Horizontal => {
                Some((0..w).map(|x| lerp(x as f32 / w as f32)).collect())
            }
            _ => None,
        };

        // Degenerate border: every pixel is band
        let full_band = bw * 2 >= w.min(h);

        let mut frame = RgbaImage::new(w, h);
        let stride = w as usize * 4;
        let direction = self.direction;

        let buf: &mut [u8] = &mut frame;
        buf.par_chunks_mut(stride).enumerate().for_each(|(row_idx, row)| {
            let y = row_idx as u32;
            let spans: [(u32, u32); 2] = if full_band || y < bw || y + bw >= h {
                [(0, w), (0, 0)]
            } else {
                [(0, bw), (w - bw, w)]
            };

            let mut set = |x: u32, px: [u8; 4]| {
                let i = x as usize * 4;
                row[i..i + 4].copy_from_slice(&px);
            };

            match direction {
                GradientDirection::Horizontal => {
                    let lut = column_lut.as_ref().unwrap();
                    for (sx, ex) in spans {
                        for x in sx..ex {
                            set(x, lut[x as usize]);
                        }
                    }
                }
                GradientDirection::Vertical => {
                    let px = lerp(y as f32 / h as f32);
                    for (sx, ex) in spans {
                        for x in sx..ex {
                            set(x, px);
                        }
                    }
                }
                GradientDirection::Diagonal => {
                    for (sx, ex) in spans {
                        for x in sx..ex {
                            set(x, lerp((x + y) as f32 / (w + h) as f32));
                        }
                    }
                }
            }
        });

        // Round the outer silhouette, then carve the interior; the hole is
        // guaranteed regardless of what the gradient painted
        apply_outer_mask(&mut frame, self.corner_radius);
        cut_interior(&mut frame, bw, self.corner_radius);

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn grayscale() -> GradientFrame {
        GradientFrame {
            width: 400,
            height: 600,
            start_color: "#000000".into(),
            end_color: "#FFFFFF".into(),
            border_width: 50,
            corner_radius: 0,
            direction: GradientDirection::Horizontal,
        }
    }

    #[test]
    fn test_horizontal_endpoints() {
        let frame = grayscale().generate().unwrap();
        // x = 0: t = 0 → exactly the start color
        assert_eq!(*frame.get_pixel(0, 300), Rgba([0, 0, 0, 255]));
        // x = width-1: within one channel unit of the end color
        let px = frame.get_pixel(399, 300);
        assert!(px[0] >= 254 && px[1] >= 254 && px[2] >= 254);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_interior_transparent_band_opaque() {
        let frame = grayscale().generate().unwrap();
        assert_eq!(frame.get_pixel(200, 300)[3], 0);
        assert_eq!(frame.get_pixel(200, 10)[3], 255);
        assert_eq!(frame.get_pixel(200, 590)[3], 255);
        assert_eq!(frame.get_pixel(10, 300)[3], 255);
    }

    #[test]
    fn test_vertical_direction() {
        let frame = GradientFrame {
            direction: GradientDirection::Vertical,
            ..grayscale()
        }
        .generate()
        .unwrap();
        assert_eq!(*frame.get_pixel(200, 0), Rgba([0, 0, 0, 255]));
        assert!(frame.get_pixel(200, 599)[0] >= 254);
    }

    #[test]
    fn test_diagonal_direction() {
        let frame = GradientFrame {
            direction: GradientDirection::Diagonal,
            ..grayscale()
        }
        .generate()
        .unwrap();
        assert_eq!(*frame.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        // t at the far corner = (399+599)/1000
        let far = frame.get_pixel(399, 599);
        let expected = (255.0 * 998.0 / 1000.0) as u8;
        assert!((far[0] as i32 - expected as i32).abs() <= 1);
    }

    #[test]
    fn test_rounded_outer_silhouette() {
        let frame = GradientFrame {
            corner_radius: 60,
            ..grayscale()
        }
        .generate()
        .unwrap();
        assert_eq!(frame.get_pixel(0, 0)[3], 0);
        assert_eq!(frame.get_pixel(0, 300)[3], 255);
    }

    #[test]
    fn test_degenerate_border_fills_everything() {
        let frame = GradientFrame {
            width: 60,
            height: 80,
            border_width: 40,
            ..grayscale()
        }
        .generate()
        .unwrap();
        assert!(frame.pixels().all(|p| p[3] == 255));
    }
}
