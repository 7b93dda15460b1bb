//! # Frame Parameters
//!
//! One explicit configuration record drives every generator. Parameters are
//! built from CLI flags, then a JSON config file (when given) overrides
//! individual fields through [`ConfigOverrides`], a typed struct whose
//! field set is the allow-list of recognized keys. Hyphenated and
//! underscored spellings are both accepted; unknown keys are ignored.

use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FrameError;

/// iPad Pro 12.9" resolution in portrait mode.
pub const DEFAULT_WIDTH: u32 = 2048;
pub const DEFAULT_HEIGHT: u32 = 2732;

/// Default frame settings.
pub const DEFAULT_BORDER_WIDTH: u32 = 80;
pub const DEFAULT_CORNER_RADIUS: u32 = 60;

/// The frame generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Simple,
    Decorative,
    Text,
    Gradient,
    Logo,
}

/// Gradient sweep direction across the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Which border band(s) carry the caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Top,
    Bottom,
    Both,
}

/// Logo placement. `Corners` resolves to the bottom-right band cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    Top,
    Bottom,
    Corners,
}

/// Outer corner treatment for the decorative frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    Rounded,
    Square,
}

/// The resolved parameter set for one generation run. Constructed once,
/// never mutated after override application.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    pub kind: FrameKind,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub border_width: u32,
    pub corner_radius: u32,
    /// Primary/border color.
    pub color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub start_color: String,
    pub end_color: String,
    pub gradient_direction: GradientDirection,
    pub event: String,
    pub date: Option<String>,
    pub text_position: TextPosition,
    pub font: Option<PathBuf>,
    pub logo: Option<PathBuf>,
    pub logo_position: LogoPosition,
    pub logo_size: u32,
    pub inner_glow: bool,
    pub show_corners: bool,
    pub corner_style: CornerStyle,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            kind: FrameKind::Simple,
            output: PathBuf::from("frame.png"),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            color: "#FF4081".into(),
            secondary_color: "#212121".into(),
            accent_color: "#FFFFFF".into(),
            text_color: "#FFFFFF".into(),
            start_color: "#FF4081".into(),
            end_color: "#7B1FA2".into(),
            gradient_direction: GradientDirection::Diagonal,
            event: "Event".into(),
            date: None,
            text_position: TextPosition::Bottom,
            font: None,
            logo: None,
            logo_position: LogoPosition::Bottom,
            logo_size: 150,
            inner_glow: true,
            show_corners: true,
            corner_style: CornerStyle::Rounded,
        }
    }
}

/// Per-field overrides deserialized from a JSON config file.
///
/// Every field is optional; only present keys override the CLI-derived
/// value. Key spellings mirror the CLI flag names in both hyphen and
/// underscore form. Unknown keys are ignored, not an error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    #[serde(rename = "type")]
    pub kind: Option<FrameKind>,
    pub output: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(alias = "border-width")]
    pub border_width: Option<u32>,
    #[serde(alias = "corner-radius")]
    pub corner_radius: Option<u32>,
    #[serde(alias = "primary_color", alias = "primary-color")]
    pub color: Option<String>,
    #[serde(alias = "secondary-color")]
    pub secondary_color: Option<String>,
    #[serde(alias = "accent-color")]
    pub accent_color: Option<String>,
    #[serde(alias = "text-color")]
    pub text_color: Option<String>,
    #[serde(alias = "start-color")]
    pub start_color: Option<String>,
    #[serde(alias = "end-color")]
    pub end_color: Option<String>,
    #[serde(alias = "gradient-direction")]
    pub gradient_direction: Option<GradientDirection>,
    #[serde(alias = "event_name", alias = "event-name")]
    pub event: Option<String>,
    #[serde(alias = "event_date", alias = "event-date")]
    pub date: Option<String>,
    #[serde(alias = "text-position")]
    pub text_position: Option<TextPosition>,
    pub font: Option<PathBuf>,
    pub logo: Option<PathBuf>,
    #[serde(alias = "logo-position")]
    pub logo_position: Option<LogoPosition>,
    #[serde(alias = "logo-size")]
    pub logo_size: Option<u32>,
    #[serde(alias = "inner-glow")]
    pub inner_glow: Option<bool>,
    #[serde(alias = "show-corners")]
    pub show_corners: Option<bool>,
    #[serde(alias = "corner-style")]
    pub corner_style: Option<CornerStyle>,
}

impl ConfigOverrides {
    /// Load overrides from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FrameError> {
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| FrameError::Config(format!("{}: {}", path.display(), e)))
    }
}

impl FrameConfig {
    /// Apply JSON overrides on top of the CLI-derived configuration.
    /// Present keys win; absent keys keep their current value.
    pub fn apply(&mut self, o: ConfigOverrides) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = o.$field { self.$field = v; })*
            };
        }
        take!(
            kind,
            output,
            width,
            height,
            border_width,
            corner_radius,
            color,
            secondary_color,
            accent_color,
            text_color,
            start_color,
            end_color,
            gradient_direction,
            event,
            text_position,
            logo_position,
            logo_size,
            inner_glow,
            show_corners,
            corner_style,
        );
        if o.date.is_some() {
            self.date = o.date;
        }
        if o.font.is_some() {
            self.font = o.font;
        }
        if o.logo.is_some() {
            self.logo = o.logo;
        }
    }
}
