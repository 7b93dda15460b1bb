//! # Marco CLI
//!
//! Command-line interface for generating photo-booth frame overlays.
//!
//! ## Usage
//!
//! ```bash
//! # Simple border frame
//! marco --type simple --color "#FF4081" --output frame.png
//!
//! # Frame with event name and date
//! marco --type text --event "Wedding" --date "Jan 31, 2026" -o wedding.png
//!
//! # Gradient frame
//! marco --type gradient --start-color "#FF4081" --end-color "#7B1FA2"
//!
//! # From a JSON config file (keys override flags)
//! marco --config event_config.json
//! ```

use clap::Parser;
use image::RgbaImage;
use std::path::{Path, PathBuf};

use marco::{
    FrameConfig, FrameError,
    config::{ConfigOverrides, FrameKind, GradientDirection, LogoPosition, TextPosition},
    frames,
};

const EXAMPLES: &str = "\
Examples:
  # Simple border frame
  marco --type simple --color \"#FF4081\" --output frame.png

  # Frame with event name and date
  marco --type text --event \"Wedding\" --date \"Jan 31, 2026\" --output wedding_frame.png

  # Gradient frame
  marco --type gradient --start-color \"#FF4081\" --end-color \"#7B1FA2\" --output gradient.png

  # From config file
  marco --config event_config.json
";

/// Marco - Generate custom photo/video frame overlays for events
#[derive(Parser, Debug)]
#[command(name = "marco")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Type of frame to generate
    #[arg(long = "type", value_enum, default_value = "simple")]
    kind: FrameKind,

    /// Path to JSON config file (keys override flags)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file path
    #[arg(long, short = 'o', default_value = "frame.png")]
    output: PathBuf,

    /// Frame width in pixels
    #[arg(long, default_value_t = marco::config::DEFAULT_WIDTH)]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = marco::config::DEFAULT_HEIGHT)]
    height: u32,

    /// Border width in pixels
    #[arg(long, default_value_t = marco::config::DEFAULT_BORDER_WIDTH)]
    border_width: u32,

    /// Primary/border color
    #[arg(long = "color", visible_alias = "primary-color", default_value = "#FF4081")]
    color: String,

    /// Secondary color (decorative corner dots)
    #[arg(long, default_value = "#212121")]
    secondary_color: String,

    /// Accent color (decorative outline and dot centers)
    #[arg(long, default_value = "#FFFFFF")]
    accent_color: String,

    /// Text color
    #[arg(long, default_value = "#FFFFFF")]
    text_color: String,

    /// Gradient start color
    #[arg(long, default_value = "#FF4081")]
    start_color: String,

    /// Gradient end color
    #[arg(long, default_value = "#7B1FA2")]
    end_color: String,

    /// Gradient direction
    #[arg(long, value_enum, default_value = "diagonal")]
    gradient_direction: GradientDirection,

    /// Event name
    #[arg(long = "event", visible_alias = "event-name", default_value = "Event")]
    event: String,

    /// Event date
    #[arg(long = "date", visible_alias = "event-date")]
    date: Option<String>,

    /// Text position
    #[arg(long, value_enum, default_value = "bottom")]
    text_position: TextPosition,

    /// Path to custom font file
    #[arg(long)]
    font: Option<PathBuf>,

    /// Path to logo image
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Logo position
    #[arg(long, value_enum, default_value = "bottom")]
    logo_position: LogoPosition,

    /// Logo size in pixels (maximum dimension)
    #[arg(long, default_value_t = 150)]
    logo_size: u32,
}

impl Cli {
    fn into_config(self) -> FrameConfig {
        FrameConfig {
            kind: self.kind,
            output: self.output,
            width: self.width,
            height: self.height,
            border_width: self.border_width,
            color: self.color,
            secondary_color: self.secondary_color,
            accent_color: self.accent_color,
            text_color: self.text_color,
            start_color: self.start_color,
            end_color: self.end_color,
            gradient_direction: self.gradient_direction,
            event: self.event,
            date: self.date,
            text_position: self.text_position,
            font: self.font,
            logo: self.logo,
            logo_position: self.logo_position,
            logo_size: self.logo_size,
            ..FrameConfig::default()
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FrameError> {
    let cli = Cli::parse();
    let config_path = cli.config.clone();
    let mut config = cli.into_config();

    // Config file keys win over CLI flags for matching keys only
    if let Some(path) = config_path {
        config.apply(ConfigOverrides::load(&path)?);
    }

    let frame = frames::generate(&config)?;
    save_frame(&frame, &config.output)
}

/// Save the frame as a PNG and confirm.
fn save_frame(frame: &RgbaImage, path: &Path) -> Result<(), FrameError> {
    frame
        .save(path)
        .map_err(|e| FrameError::Image(format!("Failed to save PNG: {}", e)))?;
    println!("Frame saved to: {}", path.display());
    Ok(())
}
