//! # Font Resolution and Text Rasterization
//!
//! Fonts resolve through a fallback chain that never fails:
//!
//! 1. An explicit TTF/OTF file path, when given and present
//! 2. A list of well-known platform font files, tried in order
//! 3. The bundled Spleen 12×24 bitmap font, scaled to the requested size
//!
//! Outline fonts render anti-aliased coverage via ab_glyph; the bitmap
//! fallback blits nearest-neighbor-scaled glyph cells. Both paths are
//! deterministic for a fixed font selection.

use ab_glyph::{Font, FontArc, FontVec, ScaleFont, point};
use image::{Rgba, RgbaImage};
use spleen_font::{FONT_12X24, PSF2Font};
use std::fs;
use std::path::Path;

use crate::draw::blend_pixel;

/// Platform font files tried when no usable font path is supplied.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Spleen glyph cell dimensions.
const BITMAP_CELL_W: usize = 12;
const BITMAP_CELL_H: usize = 24;

/// A resolved text rendering backend.
pub enum FontSource {
    /// A TrueType/OpenType font rendered through ab_glyph.
    Outline(FontArc),
    /// The bundled Spleen bitmap font, scaled to the target size.
    Bitmap,
}

/// Resolve a font through the fallback chain. Never fails: unreadable or
/// missing files fall through to the next candidate, ending at the bundled
/// bitmap font.
pub fn resolve_font(path: Option<&Path>) -> FontSource {
    if let Some(p) = path
        && p.exists()
        && let Some(font) = load_font_file(p)
    {
        return FontSource::Outline(font);
    }
    for candidate in SYSTEM_FONT_CANDIDATES {
        let p = Path::new(candidate);
        if p.exists()
            && let Some(font) = load_font_file(p)
        {
            return FontSource::Outline(font);
        }
    }
    FontSource::Bitmap
}

/// Load a font file, taking face 0 of a collection (.ttc).
fn load_font_file(path: &Path) -> Option<FontArc> {
    let bytes = fs::read(path).ok()?;
    FontVec::try_from_vec_and_index(bytes, 0).ok().map(FontArc::new)
}

impl FontSource {
    /// Measure the advance width of `text` rendered at `px` pixels.
    pub fn measure(&self, text: &str, px: f32) -> u32 {
        match self {
            FontSource::Outline(font) => {
                let scaled = font.as_scaled(px);
                let width: f32 = text
                    .chars()
                    .map(|ch| scaled.h_advance(font.glyph_id(ch)))
                    .sum();
                width.ceil() as u32
            }
            FontSource::Bitmap => text.chars().count() as u32 * bitmap_cell_width(px),
        }
    }

    /// Draw `text` onto the canvas with its top-left cell corner at
    /// `(x, y)`, blending by glyph coverage. Out-of-canvas pixels clip.
    pub fn draw(&self, frame: &mut RgbaImage, text: &str, x: i32, y: i32, px: f32, color: Rgba<u8>) {
        match self {
            FontSource::Outline(font) => draw_outline_text(font, frame, text, x, y, px, color),
            FontSource::Bitmap => draw_bitmap_text(frame, text, x, y, px, color),
        }
    }
}

fn draw_outline_text(
    font: &FontArc,
    frame: &mut RgbaImage,
    text: &str,
    x: i32,
    y: i32,
    px: f32,
    color: Rgba<u8>,
) {
    let scaled = font.as_scaled(px);
    let baseline = y as f32 + scaled.ascent();
    let mut caret = x as f32;

    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        let glyph = glyph_id.with_scale_and_position(px, point(caret, baseline));
        caret += scaled.h_advance(glyph_id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                blend_pixel(
                    frame,
                    gx as i32 + bounds.min.x as i32,
                    gy as i32 + bounds.min.y as i32,
                    color,
                    coverage,
                );
            });
        }
    }
}

/// Bitmap cell width at a target pixel height, preserving the 1:2 Spleen
/// aspect ratio.
fn bitmap_cell_width(px: f32) -> u32 {
    (bitmap_cell_height(px) + 1) / 2
}

fn bitmap_cell_height(px: f32) -> u32 {
    (px.round() as u32).max(1)
}

fn draw_bitmap_text(frame: &mut RgbaImage, text: &str, x: i32, y: i32, px: f32, color: Rgba<u8>) {
    let cell_w = bitmap_cell_width(px) as usize;
    let cell_h = bitmap_cell_height(px) as usize;

    for (i, ch) in text.chars().enumerate() {
        let src = bitmap_glyph(ch);
        let origin_x = x + (i * cell_w) as i32;

        // Nearest-neighbor scale from the 12×24 source cell
        for dy in 0..cell_h {
            for dx in 0..cell_w {
                let sx = dx * BITMAP_CELL_W / cell_w;
                let sy = dy * BITMAP_CELL_H / cell_h;
                if src[sy * BITMAP_CELL_W + sx] != 0 {
                    blend_pixel(frame, origin_x + dx as i32, y + dy as i32, color, 1.0);
                }
            }
        }
    }
}

/// Fetch a 12×24 glyph bitmap (1 = on). Unknown characters render as a
/// hollow box, matching classic console fallback behavior.
fn bitmap_glyph(ch: char) -> Vec<u8> {
    let mut glyph = vec![0u8; BITMAP_CELL_W * BITMAP_CELL_H];
    let mut spleen = PSF2Font::new(FONT_12X24).unwrap();
    let utf8 = ch.to_string();

    if let Some(rows) = spleen.glyph_for_utf8(utf8.as_bytes()) {
        for (row_y, row) in rows.enumerate() {
            for (col_x, on) in row.enumerate() {
                let idx = row_y * BITMAP_CELL_W + col_x;
                if on && idx < glyph.len() {
                    glyph[idx] = 1;
                }
            }
        }
    } else if ch != ' ' {
        for x in 0..BITMAP_CELL_W {
            glyph[x] = 1;
            glyph[(BITMAP_CELL_H - 1) * BITMAP_CELL_W + x] = 1;
        }
        for y in 0..BITMAP_CELL_H {
            glyph[y * BITMAP_CELL_W] = 1;
            glyph[y * BITMAP_CELL_W + BITMAP_CELL_W - 1] = 1;
        }
    }

    glyph
}
