// Asset management system
//
// Loads images and sprite-sheets from disk, keyed by name, before a scene
// starts. Any failure here is fatal for scene startup.

mod loader;
mod manager;

pub use loader::AssetLoader;
pub use manager::{AssetManager, AssetStats};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset already loaded: {0}")]
    AlreadyLoaded(String),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "Sprite-sheet '{key}' is {width}x{height}, not a whole number of {frame_width}x{frame_height} frames"
    )]
    InvalidFrameSize {
        key: String,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
