use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Source image has a zero dimension: {0}x{1}")]
    ZeroDimension(u32, u32),

    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    InvalidQuality(u8),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input path is not a file or directory: {0}")]
    NotFound(PathBuf),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, ResizeError>;
