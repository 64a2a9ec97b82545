//! Error types for newtext

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NewtextError>;

/// Main error type for newtext
#[derive(Debug, Error)]
pub enum NewtextError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Shaping failed: {0}")]
    Shaping(#[from] ShapingError),

    #[error("Invalid tag: {0:?}")]
    InvalidTag(String),

    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("Unknown script: {0:?}")]
    UnknownScript(String),

    #[error("Invalid language: {0:?}")]
    InvalidLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Buffer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("HarfBuzz buffer allocation failed")]
    Allocation,

    #[error("Buffer already holds shaped glyphs; reset it before adding text")]
    AlreadyShaped,

    #[error("Buffer has not been shaped yet")]
    NotShaped,

    #[error("Text of {0} bytes exceeds the native length limit")]
    TextTooLong(usize),
}

/// Font loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontLoadError {
    #[error("HarfBuzz blob allocation failed")]
    Allocation,

    #[error("Font data of {0} bytes exceeds the native length limit")]
    TooLarge(u64),

    #[error("No usable face at collection index {index}")]
    InvalidFace { index: u32 },

    #[error("HarfBuzz could not create a font instance")]
    InvalidFont,
}

/// Shaping errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapingError {
    #[error("Buffer already holds shaped glyphs")]
    AlreadyShaped,

    #[error("Buffer direction is unset; set it or call guess_segment_properties first")]
    DirectionUnset,

    #[error("Scale {font_size} x {upem} overflows a 32-bit scale")]
    ScaleOverflow { font_size: u32, upem: u32 },
}
