use std::path::PathBuf;
use thiserror::Error;

/// Failures while assembling a deck from an image directory.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No image files found in directory: {0:?}")]
    NoImages(PathBuf),

    #[error("Failed to load image data for {path:?}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("A deck needs at least one slide")]
    Empty,
}

pub type Result<T> = std::result::Result<T, DeckError>;
