//=========================================================================
// Game Errors
//=========================================================================
//
// Crate-wide error taxonomy.
//
// Load-time failures (assets, catalog shape, font) are raised before the
// window opens. `Layout` is the only error a running game can produce.
// Platform variants wrap winit/pixels failures and are fatal.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== GameError ===========================================================

#[derive(Debug, Error)]
pub enum GameError {
    /// An asset file or directory could not be read.
    #[error("failed to read asset {path}: {source}")]
    AssetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be decoded.
    #[error("failed to decode image {path}: {source}")]
    AssetDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The asset root holds fewer level directories than the game needs.
    #[error("no image directory found for level {level}")]
    MissingLevel { level: usize },

    /// A level cannot alternate targets with fewer than two items.
    #[error("level {level} has {found} item(s), at least 2 are required")]
    InsufficientItems { level: usize, found: usize },

    /// The font file is not a usable TrueType/OpenType font.
    #[error("invalid font file {path}")]
    Font { path: PathBuf },

    /// Random placement could not fit every item in the layout region.
    #[error("could not place {items} items without overlap after {attempts} attempts")]
    Layout { items: usize, attempts: u32 },

    /// Event loop creation or execution failed.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// The pixel surface could not be created or presented.
    #[error("surface error: {0}")]
    Surface(#[from] pixels::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

//=========================================================================
// Unit Tests
//=========================================================================
