use thiserror::Error;

/// Errors surfaced by the editor and its background tasks
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Screen capture failed: {0}")]
    Capture(String),

    #[error("Invalid bitmap: {width}x{height} with {len} bytes")]
    InvalidBitmap {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Clipboard item of type {0} is not an image")]
    NotAnImage(String),

    #[error("Background task was dropped before completing")]
    Cancelled,
}

pub type EditorResult<T> = Result<T, EditorError>;
