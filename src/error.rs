//! # Error Types
//!
//! This module defines error types used throughout the marco library.

use thiserror::Error;

/// Main error type for marco operations
#[derive(Debug, Error)]
pub enum FrameError {
    /// A color string that is not exactly 6 hex digits (after stripping `#`)
    #[error("Invalid color format: {0:?} (expected 6 hex digits, e.g. \"#FF4081\")")]
    InvalidColorFormat(String),

    /// Config file loading or parsing error
    #[error("Config error: {0}")]
    Config(String),

    /// Image decoding/encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
