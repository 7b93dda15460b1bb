//! # Frame Generators
//!
//! One module per frame style, each with a parameter struct and a
//! `generate()` entry point producing a full-canvas RGBA overlay:
//!
//! | Generator | Description |
//! |-----------|-------------|
//! | [`simple`] | Solid border with optional inner glow |
//! | [`decorative`] | Accent outline and corner dot ornaments |
//! | [`text`] | Event name / date captions in the border band |
//! | [`gradient`] | Two-color gradient border |
//! | [`logo`] | Logo stamped into the border band |
//!
//! Every generated frame keeps the same invariant: an opaque/decorated
//! border band of `border_width` pixels and a fully transparent rounded
//! interior where the camera feed shows through.

pub mod decorative;
pub mod gradient;
pub mod logo;
pub mod simple;
pub mod text;

use image::RgbaImage;

use crate::config::{FrameConfig, FrameKind};
use crate::error::FrameError;

/// Run the generator selected by the configuration.
pub fn generate(config: &FrameConfig) -> Result<RgbaImage, FrameError> {
    match config.kind {
        FrameKind::Simple => simple::SimpleFrame::from_config(config).generate(),
        FrameKind::Decorative => decorative::DecorativeFrame::from_config(config).generate(),
        FrameKind::Text => text::TextFrame::from_config(config).generate(),
        FrameKind::Gradient => gradient::GradientFrame::from_config(config).generate(),
        FrameKind::Logo => logo::LogoFrame::from_config(config).generate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameConfig;

    /// Every generator leaves the exact canvas center fully transparent
    /// (no default text/logo placement draws there).
    #[test]
    fn test_all_generators_have_transparent_center() {
        for kind in [
            FrameKind::Simple,
            FrameKind::Decorative,
            FrameKind::Text,
            FrameKind::Gradient,
            FrameKind::Logo,
        ] {
            let config = FrameConfig {
                kind,
                width: 300,
                height: 400,
                border_width: 40,
                ..Default::default()
            };
            let frame = generate(&config).unwrap();
            assert_eq!(frame.dimensions(), (300, 400));
            assert_eq!(
                frame.get_pixel(150, 200)[3],
                0,
                "center pixel must be transparent for {:?}",
                kind
            );
        }
    }
}
