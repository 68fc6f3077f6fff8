//! Error types for emblem rendering and export.

use std::path::PathBuf;

/// Errors that can occur while rendering or writing icons.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Icon size must be positive, got {0}")]
    InvalidSize(u32),

    #[error("Export configuration lists no icon sizes")]
    NoSizes,

    #[error("Failed to parse emblem SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Failed to allocate a {size}x{size} raster surface")]
    Pixmap { size: u32 },

    #[error("Failed to encode icon image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid export configuration: {0}")]
    Config(#[from] serde_json::Error),
}
